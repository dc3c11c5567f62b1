//! Completion client port
//!
//! Defines the interface for the single remote text-generation endpoint.

use async_trait::async_trait;
use thiserror::Error;

/// Status reported for failures that never produced an HTTP response
pub const NO_STATUS: i32 = -1;

/// Errors that can occur during a completion call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// The endpoint answered with a non-2xx status
    #[error("HTTP {status}: {detail}")]
    Http { status: i32, detail: String },

    /// The request never completed (connect failure, DNS, reset)
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout")]
    Timeout,

    /// A 2xx response whose body could not be decoded
    #[error("Invalid response (HTTP {status}): {detail}")]
    InvalidResponse { status: i32, detail: String },
}

impl CompletionError {
    /// HTTP-style status, or [`NO_STATUS`] when no response arrived
    pub fn status(&self) -> i32 {
        match self {
            CompletionError::Http { status, .. } | CompletionError::InvalidResponse { status, .. } => {
                *status
            }
            CompletionError::Transport(_) | CompletionError::Timeout => NO_STATUS,
        }
    }

    /// Error detail without the status prefix
    pub fn detail(&self) -> String {
        match self {
            CompletionError::Http { detail, .. } | CompletionError::InvalidResponse { detail, .. } => {
                detail.clone()
            }
            CompletionError::Transport(detail) => detail.clone(),
            CompletionError::Timeout => "request timed out".to_string(),
        }
    }
}

/// One chat-completion request: a system instruction plus a user prompt
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    /// Sampling temperature in `[0, 1]`
    pub temperature: f64,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>, temperature: f64) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            temperature,
        }
    }
}

/// A successful completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Generated text (untrimmed; empty when the endpoint returned no content)
    pub text: String,
    /// HTTP status of the response
    pub status: i32,
}

impl Completion {
    pub fn new(text: impl Into<String>, status: i32) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }
}

/// Client for the remote text-generation service
///
/// Implementations (adapters) live in the infrastructure layer. One call,
/// no retries, no streaming.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Model identifier sent with every request
    fn model(&self) -> &str;

    /// Send one request and wait for the full reply
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, CompletionError>;
}
