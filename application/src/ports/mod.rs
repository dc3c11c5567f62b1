//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod answer_store;
pub mod call_logger;
pub mod completion_client;
pub mod progress;
