//! Batch parameters: index range, checkpoint cadence, call budget.

use serde::{Deserialize, Serialize};
use strata_domain::DEFAULT_MAX_CALLS;

/// Batch run control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchParams {
    /// First 1-based question position to process.
    pub start: usize,
    /// Last position (inclusive); `None` means the last question.
    pub end: Option<usize>,
    /// Write a checkpoint whenever the position is a multiple of this.
    pub checkpoint_every: usize,
    /// Remote-call ceiling per question.
    pub max_calls: usize,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            start: 1,
            end: None,
            checkpoint_every: 30,
            max_calls: DEFAULT_MAX_CALLS,
        }
    }
}

impl BatchParams {
    pub fn with_range(mut self, start: usize, end: Option<usize>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_checkpoint_every(mut self, every: usize) -> Self {
        self.checkpoint_every = every;
        self
    }

    pub fn with_max_calls(mut self, max_calls: usize) -> Self {
        self.max_calls = max_calls;
        self
    }

    /// Whether a checkpoint is due after processing `position`
    pub fn is_checkpoint(&self, position: usize) -> bool {
        self.checkpoint_every > 0 && position % self.checkpoint_every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = BatchParams::default();
        assert_eq!(params.start, 1);
        assert_eq!(params.end, None);
        assert_eq!(params.checkpoint_every, 30);
        assert_eq!(params.max_calls, 20);
    }

    #[test]
    fn test_is_checkpoint() {
        let params = BatchParams::default();
        assert!(!params.is_checkpoint(29));
        assert!(params.is_checkpoint(30));
        assert!(params.is_checkpoint(60));

        let disabled = params.with_checkpoint_every(0);
        assert!(!disabled.is_checkpoint(30));
    }
}
