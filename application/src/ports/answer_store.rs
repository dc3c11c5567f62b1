//! Answer store port
//!
//! Durable storage for the index-aligned answers array. The batch runner
//! writes a full snapshot at every checkpoint.

use strata_domain::AnswerRecord;
use thiserror::Error;

/// Errors that can occur while reading or writing answers
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} must contain a JSON array")]
    NotAnArray { path: String },

    #[error("{path} holds {found} answers but there are {expected} questions")]
    LengthMismatch {
        path: String,
        expected: usize,
        found: usize,
    },
}

/// Persistence for the answers array
pub trait AnswerStore: Send + Sync {
    /// Load existing answers for `total` questions, or placeholders when none exist
    fn load(&self, total: usize) -> Result<Vec<AnswerRecord>, StoreError>;

    /// Replace the stored snapshot with `answers`
    fn save(&self, answers: &[AnswerRecord]) -> Result<(), StoreError>;
}
