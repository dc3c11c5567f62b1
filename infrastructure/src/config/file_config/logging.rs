//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write tracing output to this file.
    pub file: Option<PathBuf>,
    /// JSONL transcript of every remote call.
    pub transcript: Option<PathBuf>,
}
