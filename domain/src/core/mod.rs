//! Core domain concepts shared across all subdomains.
//!
//! - [`question::QuestionRecord`]: one entry of the input question file
//! - [`range::QuestionRange`]: the 1-based inclusive slice of a batch run
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod range;
pub mod string;
