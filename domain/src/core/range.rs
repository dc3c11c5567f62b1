//! Batch index range value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A 1-based inclusive range of question positions (Value Object)
///
/// The end is clamped to the number of loaded questions, so a range such as
/// `1..=6208` can be reused against a shorter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRange {
    start: usize,
    end: usize,
}

impl QuestionRange {
    /// Resolve a requested range against `total` questions
    ///
    /// `end = None` means "through the last question".
    pub fn resolve(start: usize, end: Option<usize>, total: usize) -> Result<Self, DomainError> {
        if total == 0 {
            return Err(DomainError::NoQuestions);
        }
        let end = end.unwrap_or(total).min(total);
        if start == 0 || start > end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of positions covered
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false: a resolved range covers at least one position
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate positions in order
    pub fn positions(&self) -> impl Iterator<Item = usize> {
        self.start..=self.end
    }
}
