use serde::{Deserialize, Serialize};

/// Prompt assigned to a question whose source cell was blank.
///
/// Rows that resolve to this sentinel are treated as template rows left
/// in the sheet and never make it into the question bank.
pub const DEFAULT_PROMPT: &str = "Default Question Prompt";

/// A single multiple-choice exam question.
///
/// `answer` indexes into `choices`; it is `None` when the source row had
/// no parseable answer letter. When `Some`, it always points at the
/// correct choice, including after the choices have been shuffled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answer: Option<usize>,
    pub choices: Vec<String>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: Option<usize>, choices: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer,
            choices,
        }
    }

    /// Whether this question carries the blank-prompt sentinel.
    pub fn is_placeholder(&self) -> bool {
        self.prompt == DEFAULT_PROMPT
    }

    /// The text of the correct choice, if the answer index is set and in
    /// bounds.
    pub fn correct_choice(&self) -> Option<&str> {
        self.answer
            .and_then(|index| self.choices.get(index))
            .map(String::as_str)
    }

    /// Checks if a given choice text is the correct answer.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_choice() == Some(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_choice() {
        let question = Question::new(
            "What is 2+2?",
            Some(1),
            vec!["3".to_string(), "4".to_string(), "5".to_string()],
        );
        assert_eq!(question.correct_choice(), Some("4"));
        assert!(question.is_correct("4"));
        assert!(!question.is_correct("3"));
    }

    #[test]
    fn test_correct_choice_unset_or_out_of_range() {
        let unset = Question::new("Q", None, vec!["a".to_string()]);
        assert_eq!(unset.correct_choice(), None);
        assert!(!unset.is_correct("a"));

        let out_of_range = Question::new("Q", Some(5), vec!["a".to_string()]);
        assert_eq!(out_of_range.correct_choice(), None);
    }

    #[test]
    fn test_is_placeholder() {
        assert!(Question::new(DEFAULT_PROMPT, None, vec![]).is_placeholder());
        assert!(!Question::new("Real question?", None, vec![]).is_placeholder());
    }
}
