//! Port for the remote-call transcript.
//!
//! Defines the [`CallLogger`] trait for recording every remote call (prompt,
//! reply, status) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the full transcript
//! of a batch run in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured transcript event.
pub struct CallEvent {
    /// Event type identifier (e.g., "completion", "question_answered").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl CallEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible; logging failures never interrupt a
/// batch run.
pub trait CallLogger: Send + Sync {
    fn log(&self, event: CallEvent);
}

/// No-op implementation for tests and when the transcript is disabled.
pub struct NoCallLogger;

impl CallLogger for NoCallLogger {
    fn log(&self, _event: CallEvent) {}
}
