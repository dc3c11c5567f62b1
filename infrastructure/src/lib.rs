//! Infrastructure layer for strata
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use http::{OpenAiCompatibleClient, OpenAiSettings};
pub use logging::JsonlCallLogger;
pub use store::{JsonAnswerStore, load_questions, read_raw_answers};
