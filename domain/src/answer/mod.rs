//! Answer records and the output-file validator.

pub mod record;
pub mod validation;

pub use record::{AnswerRecord, PLACEHOLDER_PREFIX};
pub use validation::{MAX_OUTPUT_CHARS, ValidationError, validate_answers};
