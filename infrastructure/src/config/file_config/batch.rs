//! Batch configuration from TOML (`[batch]` and `[budget]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strata_domain::DEFAULT_MAX_CALLS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// JSON array of question objects.
    pub input: PathBuf,
    /// Answers file, also used as the checkpoint.
    pub output: PathBuf,
    /// First 1-based position to process.
    pub start: usize,
    /// Last position (inclusive); unset means the last question.
    pub end: Option<usize>,
    /// Checkpoint whenever the position is a multiple of this.
    pub checkpoint_every: usize,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("questions.json"),
            output: PathBuf::from("answers.json"),
            start: 1,
            end: None,
            checkpoint_every: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBudgetConfig {
    /// Remote calls allowed per question.
    pub max_calls: usize,
}

impl Default for FileBudgetConfig {
    fn default() -> Self {
        Self {
            max_calls: DEFAULT_MAX_CALLS,
        }
    }
}
