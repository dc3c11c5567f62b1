//! Answer record entity

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Prefix shared by every unanswered slot
pub const PLACEHOLDER_PREFIX: &str = "Placeholder answer";

/// One slot of the answers file: `{"output": "..."}`
///
/// Slots start as placeholders and are overwritten exactly once when their
/// question is processed, whether it succeeded or failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub output: String,
}

impl AnswerRecord {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Placeholder for the question at 1-based `position`
    pub fn placeholder(position: usize) -> Self {
        Self::new(format!("{} for question {}", PLACEHOLDER_PREFIX, position))
    }

    /// A full set of placeholders for `total` questions
    pub fn placeholders(total: usize) -> Vec<Self> {
        (1..=total).map(Self::placeholder).collect()
    }

    /// Terminal answer recorded when processing a question failed
    pub fn failure(position: usize, error: impl Display) -> Self {
        Self::new(format!("Error processing question {}: {}", position, error))
    }

    /// Whether this slot still awaits an answer
    pub fn is_placeholder(&self) -> bool {
        self.output.starts_with(PLACEHOLDER_PREFIX)
    }
}
