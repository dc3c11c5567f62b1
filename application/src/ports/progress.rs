//! Progress notification port
//!
//! Defines the interface for reporting progress during a batch run.

use strata_domain::{Category, StrategyKind};

/// How one question slot ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    /// The router produced an answer
    Answered,
    /// Processing failed; an error answer was recorded
    Failed,
    /// The slot already held an answer
    Skipped,
}

/// Callback for progress updates during a batch run
///
/// Implementations live in the presentation layer.
pub trait BatchProgressNotifier: Send + Sync {
    /// Called once before the first question, with the number of positions in range
    fn on_batch_start(&self, total: usize);

    /// Called when a question has been classified and dispatched
    fn on_question_routed(&self, _position: usize, _category: &Category, _strategy: StrategyKind) {}

    /// Called when a question slot is settled
    fn on_question_complete(&self, position: usize, outcome: QuestionOutcome);

    /// Called after each checkpoint write
    fn on_checkpoint(&self, _position: usize) {}

    /// Called once after the final write
    fn on_batch_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl BatchProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total: usize) {}
    fn on_question_complete(&self, _position: usize, _outcome: QuestionOutcome) {}
    fn on_batch_complete(&self) {}
}
