//! Endpoint configuration from TOML (`[endpoint]` section)

use crate::http::OpenAiSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Base URL; `/chat/completions` is appended (legacy env: `API_BASE`).
    pub base_url: String,
    /// Model identifier sent with every request (legacy env: `MODEL_NAME`).
    pub model: String,
    /// Environment variable holding the bearer token.
    pub api_key_env: String,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Completion length limit per call.
    pub max_tokens: u32,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/v1".to_string(),
            model: "default".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 60,
            max_tokens: 900,
        }
    }
}

impl FileEndpointConfig {
    /// Read the API key from the configured variable, if set and non-empty
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl FileEndpointConfig {
    /// Client settings, with the API key resolved from the environment
    pub fn client_settings(&self) -> OpenAiSettings {
        OpenAiSettings::new(&self.base_url, &self.model)
            .with_api_key(self.resolve_api_key())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_tokens(self.max_tokens)
    }
}
