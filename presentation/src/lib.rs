//! Presentation layer for strata
//!
//! This crate contains CLI definitions, output formatters
//! and batch progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, EvalArgs, RunArgs};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{BatchProgressReporter, SimpleBatchProgress};
