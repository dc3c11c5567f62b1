//! Output-file validation.
//!
//! Runs over the answers file as re-read from disk (raw JSON values), so
//! that a structurally broken file is reported rather than rejected by the
//! deserializer.

use crate::core::string::char_len;
use serde_json::Value;
use thiserror::Error;

/// Maximum characters allowed in a single answer
///
/// Inclusive: an answer of exactly this many characters passes. Consumers
/// that apply the limit exclusively (`len >= 5000`) reject that answer.
pub const MAX_OUTPUT_CHARS: usize = 5000;

/// A violation found in the answers file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Mismatched lengths: {questions} questions vs {answers} answers")]
    LengthMismatch { questions: usize, answers: usize },

    #[error("Missing 'output' field for answer index {index}")]
    MissingOutput { index: usize },

    #[error("Answer at index {index} has non-string output: {found}")]
    NonStringOutput { index: usize, found: &'static str },

    #[error(
        "Answer at index {index} exceeds {limit} characters ({chars} chars); answers must not include intermediate results"
    )]
    TooLong {
        index: usize,
        chars: usize,
        limit: usize,
    },
}

/// Check an answers array against the question count
///
/// Stops at the first violation. Indices in errors are 0-based.
pub fn validate_answers(question_count: usize, answers: &[Value]) -> Result<(), ValidationError> {
    if question_count != answers.len() {
        return Err(ValidationError::LengthMismatch {
            questions: question_count,
            answers: answers.len(),
        });
    }

    for (index, answer) in answers.iter().enumerate() {
        let output = answer
            .get("output")
            .ok_or(ValidationError::MissingOutput { index })?;
        let Some(text) = output.as_str() else {
            return Err(ValidationError::NonStringOutput {
                index,
                found: json_type_name(output),
            });
        };
        let chars = char_len(text);
        if chars > MAX_OUTPUT_CHARS {
            return Err(ValidationError::TooLong {
                index,
                chars,
                limit: MAX_OUTPUT_CHARS,
            });
        }
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
