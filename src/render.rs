//! Plain-text rendering of exams and answer keys.
//!
//! Both documents share one layout: a metadata header, then numbered
//! questions with lettered choices. The answer key additionally marks
//! the correct choice; questions without an answer index get no marker.

use std::fmt::Write;

use crate::ExamConfig;
use crate::models::Question;

const ANSWER_MARKER: &str = ">>";

/// Render the exam document (no answers marked).
pub fn render_exam(questions: &[Question], config: &ExamConfig) -> String {
    render_document(questions, config, "EXAM", false)
}

/// Render the answer key, marking the correct choice of each question.
pub fn render_answer_key(questions: &[Question], config: &ExamConfig) -> String {
    render_document(questions, config, "ANSWER KEY", true)
}

fn render_document(
    questions: &[Question],
    config: &ExamConfig,
    title: &str,
    mark_answers: bool,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} {} {}", config.course_name, config.term, title);
    let _ = writeln!(out, "Number of questions: {}", questions.len());
    let _ = writeln!(out);

    for (number, question) in questions.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", number + 1, question.prompt);
        for (index, choice) in question.choices.iter().enumerate() {
            let marker = if mark_answers && question.answer == Some(index) {
                ANSWER_MARKER
            } else {
                "  "
            };
            let _ = writeln!(out, "  {} {}. {}", marker, choice_label(index), choice);
        }
        let _ = writeln!(out);
    }

    out
}

/// Label for a choice index: `A`..`Z`, then `AA`, `AB`, and so on.
fn choice_label(index: usize) -> String {
    let mut label = String::new();
    let mut n = index;
    loop {
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ExamConfig {
        ExamConfig {
            course_name: "Algebra I".to_string(),
            term: "August 2026".to_string(),
            exam_size: 25,
        }
    }

    fn question() -> Question {
        Question::new(
            "What is 2+2?",
            Some(1),
            vec!["3".to_string(), "4".to_string(), "5".to_string()],
        )
    }

    #[test]
    fn test_exam_has_no_markers() {
        let text = render_exam(&[question()], &config());
        assert!(text.contains("Algebra I August 2026 EXAM"));
        assert!(text.contains("1. What is 2+2?"));
        assert!(text.contains("B. 4"));
        assert!(!text.contains(ANSWER_MARKER));
    }

    #[test]
    fn test_answer_key_marks_correct_choice() {
        let text = render_answer_key(&[question()], &config());
        assert!(text.contains("Algebra I August 2026 ANSWER KEY"));
        assert!(text.contains(">> B. 4"));
        assert!(!text.contains(">> A. 3"));
        assert!(!text.contains(">> C. 5"));
    }

    #[test]
    fn test_answer_key_skips_unset_answer() {
        let unanswered = Question::new("Q?", None, vec!["a".to_string(), "b".to_string()]);
        let text = render_answer_key(&[unanswered], &config());
        assert!(!text.contains(ANSWER_MARKER));
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(choice_label(0), "A");
        assert_eq!(choice_label(25), "Z");
        assert_eq!(choice_label(26), "AA");
        assert_eq!(choice_label(27), "AB");
    }
}
