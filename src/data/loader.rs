//! Question bank loading.
//!
//! Converts tabular rows into [`Question`] entities. A row is laid out
//! as `[prompt, answer-letter, choice_1, choice_2, ..., choice_n]`.
//! Malformed cells never abort a load: a blank prompt resolves to the
//! placeholder sentinel (and the row is dropped), an unparseable answer
//! letter resolves to an unset answer index.

use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::models::{DEFAULT_PROMPT, Question};

/// Error loading a question bank from a file.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to read the file.
    Io { path: String, source: std::io::Error },
    /// Failed to parse the file as CSV.
    Csv { path: String, source: csv::Error },
    /// Failed to parse the file as a JSON array of rows.
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "failed to read {}: {}", path, source),
            LoadError::Csv { path, source } => {
                write!(f, "failed to parse {} as CSV: {}", path, source)
            }
            LoadError::Json { path, source } => {
                write!(f, "failed to parse {} as JSON rows: {}", path, source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Csv { source, .. } => Some(source),
            LoadError::Json { source, .. } => Some(source),
        }
    }
}

/// Convert raw rows into questions, dropping placeholder rows.
///
/// Pure transform: no side effects beyond a debug log of the row counts.
pub fn questions_from_rows(rows: &[Vec<Value>]) -> Vec<Question> {
    let questions: Vec<Question> = rows
        .iter()
        .map(|row| question_from_row(row))
        .filter(|question| !question.is_placeholder())
        .collect();

    debug!(
        rows = rows.len(),
        questions = questions.len(),
        "converted rows into questions"
    );
    questions
}

/// Build a single question from one row of cells.
fn question_from_row(row: &[Value]) -> Question {
    let prompt = row.first().map(cell_to_text).unwrap_or_default();
    let prompt = prompt.trim();
    let prompt = if prompt.is_empty() {
        DEFAULT_PROMPT
    } else {
        prompt
    };

    let answer = row
        .get(1)
        .map(cell_to_text)
        .as_deref()
        .and_then(letter_to_index);

    let choices = row
        .iter()
        .skip(2)
        .map(cell_to_text)
        .filter(|choice| !choice.is_empty())
        .collect();

    Question::new(prompt, answer, choices)
}

/// Map an answer letter to a zero-based choice index.
///
/// Returns `None` for anything that is not a single ASCII letter;
/// malformed input never produces an error. Whether the index fits the
/// question's choice count is checked at shuffle time, not here.
pub fn letter_to_index(letter: &str) -> Option<usize> {
    let mut chars = letter.trim().chars();
    let first = chars.next()?;
    if chars.next().is_some() || !first.is_ascii_alphabetic() {
        return None;
    }
    Some(first.to_ascii_uppercase() as usize - 'A' as usize)
}

/// Coerce a raw cell to text.
///
/// Spreadsheet exports carry booleans and numbers alongside strings;
/// everything is normalized to text before prompt/choice processing.
fn cell_to_text(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        _ => String::new(),
    }
}

/// Read rows from a CSV file without a header line.
///
/// Rows may have uneven lengths; trailing choice columns are often
/// missing in sheet exports.
pub fn load_rows_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<Value>>, LoadError> {
    let path = path.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Csv {
            path: path.display().to_string(),
            source,
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        rows.push(
            record
                .iter()
                .map(|cell| Value::String(cell.to_string()))
                .collect(),
        );
    }
    Ok(rows)
}

/// Read rows from a JSON file holding an array of cell arrays.
pub fn load_rows_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<Value>>, LoadError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Load a question bank from a CSV file.
pub fn load_questions_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    Ok(questions_from_rows(&load_rows_from_csv(path)?))
}

/// Load a question bank from a JSON row file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    Ok(questions_from_rows(&load_rows_from_json(path)?))
}
