mod question;

pub use question::{DEFAULT_PROMPT, Question};
