//! # exam-gen
//!
//! Generates randomized multiple-choice exams and matching answer keys
//! from a tabular question bank.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exam_gen::{Exam, ExamConfig, ExamError};
//!
//! fn main() -> Result<(), ExamError> {
//!     let config = ExamConfig {
//!         course_name: "Algebra I".to_string(),
//!         term: "August 2026".to_string(),
//!         exam_size: 25,
//!     };
//!
//!     // Load the question bank from a CSV export and randomize it
//!     let exam = Exam::from_csv("bank.csv", config)?;
//!
//!     println!("{}", exam.render_exam());
//!     println!("{}", exam.render_answer_key());
//!     Ok(())
//! }
//! ```

mod data;
mod models;
mod randomizer;
mod render;

use std::fmt;
use std::path::Path;

use rand::Rng;

pub use data::{
    LoadError, letter_to_index, load_questions_from_csv, load_questions_from_json,
    load_rows_from_csv, load_rows_from_json, questions_from_rows,
};
pub use models::{DEFAULT_PROMPT, Question};
pub use randomizer::{shuffle_bank, shuffle_choices};
pub use render::{render_answer_key, render_exam};

/// Error type for exam generation.
#[derive(Debug)]
pub enum ExamError {
    /// Error loading the question bank.
    Load(LoadError),
    /// The question bank contained no usable questions.
    EmptyBank,
    /// IO error while writing the generated documents.
    Io(std::io::Error),
}

impl fmt::Display for ExamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamError::Load(e) => write!(f, "Failed to load question bank: {}", e),
            ExamError::EmptyBank => write!(f, "Question bank contains no usable questions"),
            ExamError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ExamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExamError::Load(e) => Some(e),
            ExamError::EmptyBank => None,
            ExamError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for ExamError {
    fn from(err: LoadError) -> Self {
        ExamError::Load(err)
    }
}

impl From<std::io::Error> for ExamError {
    fn from(err: std::io::Error) -> Self {
        ExamError::Io(err)
    }
}

/// Metadata carried into the generated documents.
#[derive(Debug, Clone)]
pub struct ExamConfig {
    /// Course name placed in the document header.
    pub course_name: String,
    /// Term placed in the document header, e.g. "August 2026".
    pub term: String,
    /// Number of questions to draw from the bank.
    pub exam_size: usize,
}

/// A generated exam: a randomized selection of questions plus metadata.
pub struct Exam {
    config: ExamConfig,
    questions: Vec<Question>,
}

impl Exam {
    /// Draw a randomized exam from a question bank.
    ///
    /// Shuffles the bank and each question's choices, then keeps the
    /// first `exam_size` questions (fewer if the bank is smaller). The
    /// bank itself is left untouched.
    pub fn generate<R: Rng>(
        bank: &[Question],
        config: ExamConfig,
        rng: &mut R,
    ) -> Result<Self, ExamError> {
        if bank.is_empty() {
            return Err(ExamError::EmptyBank);
        }

        let mut questions = shuffle_bank(bank, rng);
        questions.truncate(config.exam_size);
        Ok(Self { config, questions })
    }

    /// Load a question bank from a CSV file and draw an exam from it.
    pub fn from_csv<P: AsRef<Path>>(path: P, config: ExamConfig) -> Result<Self, ExamError> {
        let bank = load_questions_from_csv(path)?;
        Self::generate(&bank, config, &mut rand::thread_rng())
    }

    /// Load a question bank from a JSON row file and draw an exam from it.
    pub fn from_json<P: AsRef<Path>>(path: P, config: ExamConfig) -> Result<Self, ExamError> {
        let bank = load_questions_from_json(path)?;
        Self::generate(&bank, config, &mut rand::thread_rng())
    }

    /// The questions selected for this exam, in exam order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn config(&self) -> &ExamConfig {
        &self.config
    }

    /// Render the exam document.
    pub fn render_exam(&self) -> String {
        render::render_exam(&self.questions, &self.config)
    }

    /// Render the answer key, with each correct choice marked.
    pub fn render_answer_key(&self) -> String {
        render::render_answer_key(&self.questions, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn bank() -> Vec<Question> {
        (0..8)
            .map(|i| {
                Question::new(
                    format!("Question {}?", i),
                    Some(0),
                    vec!["right".to_string(), "wrong".to_string()],
                )
            })
            .collect()
    }

    fn config(exam_size: usize) -> ExamConfig {
        ExamConfig {
            course_name: "Algebra I".to_string(),
            term: "August 2026".to_string(),
            exam_size,
        }
    }

    #[test]
    fn test_generate_truncates_to_exam_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let exam = Exam::generate(&bank(), config(3), &mut rng).unwrap();
        assert_eq!(exam.questions().len(), 3);
    }

    #[test]
    fn test_generate_with_small_bank() {
        let mut rng = StdRng::seed_from_u64(5);
        let exam = Exam::generate(&bank(), config(100), &mut rng).unwrap();
        assert_eq!(exam.questions().len(), 8);
    }

    #[test]
    fn test_generate_empty_bank_is_an_error() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = Exam::generate(&[], config(10), &mut rng);
        assert!(matches!(result, Err(ExamError::EmptyBank)));
    }

    #[test]
    fn test_exam_answers_stay_correct() {
        let mut rng = StdRng::seed_from_u64(11);
        let exam = Exam::generate(&bank(), config(8), &mut rng).unwrap();
        for question in exam.questions() {
            assert_eq!(question.correct_choice(), Some("right"));
        }
    }
}
