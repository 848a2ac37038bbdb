mod loader;

pub use loader::{
    LoadError, letter_to_index, load_questions_from_csv, load_questions_from_json,
    load_rows_from_csv, load_rows_from_json, questions_from_rows,
};
