//! Domain layer for strata
//!
//! This crate contains the pure logic of the question router: no I/O, no
//! async, no knowledge of the completion endpoint.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! A classifier label becomes a closed [`Category`]; the dispatch table in
//! [`StrategyKind::for_category`] picks the strategy that answers it.
//!
//! ## Call budget
//!
//! Every question gets a fresh [`CallBudget`]. Once its ceiling is reached,
//! further calls fail with [`BudgetExhausted`] before touching the network.
//!
//! ## Answers
//!
//! [`AnswerRecord`]s are index-aligned with [`QuestionRecord`]s and start as
//! placeholders; [`validate_answers`] checks the final file.

pub mod answer;
pub mod budget;
pub mod config;
pub mod core;
pub mod grading;
pub mod parsing;
pub mod prompt;
pub mod routing;
pub mod voting;

// Re-export commonly used types
pub use answer::{AnswerRecord, MAX_OUTPUT_CHARS, ValidationError, validate_answers};
pub use budget::{BudgetExhausted, CallBudget, DEFAULT_MAX_CALLS};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use self::core::{error::DomainError, question::QuestionRecord, range::QuestionRange};
pub use grading::{GradeKind, TestCase};
pub use parsing::ReviewVerdict;
pub use prompt::PromptTemplate;
pub use routing::{Category, StrategyKind};
pub use voting::{VoteOutcome, VoteTally};
