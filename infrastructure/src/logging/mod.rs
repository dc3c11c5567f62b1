//! Logging infrastructure: the JSONL call transcript.
//!
//! Provides [`JsonlCallLogger`], which implements the
//! [`CallLogger`](strata_application::CallLogger) port.

mod jsonl_call_logger;

pub use jsonl_call_logger::JsonlCallLogger;
