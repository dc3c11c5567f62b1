//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question range: start={start}, end={end} (must satisfy 1 <= start <= end)")]
    InvalidRange { start: usize, end: usize },

    #[error("Question set is empty")]
    NoQuestions,

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

impl DomainError {
    /// Check if this error comes from a misconfigured index range
    pub fn is_range_error(&self) -> bool {
        matches!(self, DomainError::InvalidRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_display() {
        let error = DomainError::InvalidRange { start: 5, end: 2 };
        assert_eq!(
            error.to_string(),
            "Invalid question range: start=5, end=2 (must satisfy 1 <= start <= end)"
        );
    }

    #[test]
    fn test_is_range_error_check() {
        assert!(DomainError::InvalidRange { start: 0, end: 1 }.is_range_error());
        assert!(!DomainError::NoQuestions.is_range_error());
        assert!(!DomainError::InvalidQuestion("test".to_string()).is_range_error());
    }
}
