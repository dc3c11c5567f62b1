//! Application layer for strata
//!
//! This crate contains the call session, prompting strategies, use cases,
//! port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod strategies;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BatchParams, StrategyParams};
pub use ports::{
    answer_store::{AnswerStore, StoreError},
    call_logger::{CallEvent, CallLogger, NoCallLogger},
    completion_client::{Completion, CompletionClient, CompletionError, CompletionRequest},
    progress::{BatchProgressNotifier, NoProgress, QuestionOutcome},
};
pub use session::{CallError, CallSession};
pub use strategies::{Strategy, build_strategy};
pub use use_cases::classify::classify_question;
pub use use_cases::evaluate::{
    EvaluateInput, EvaluateUseCase, EvaluationReport, EvaluationRow, GraderMode, SolverMode,
};
pub use use_cases::route_question::{RouteQuestionUseCase, RoutedAnswer};
pub use use_cases::run_batch::{BatchSummary, RunBatchError, RunBatchOutput, RunBatchUseCase};
