//! Configuration file loading for strata
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Legacy environment variables `API_BASE`, `MODEL_NAME`
//! 2. `STRATA_` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./strata.toml` or `./.strata.toml`
//! 5. Global: `~/.config/strata/config.toml`
//! 6. Default values

mod error;
mod file_config;
mod loader;

pub use file_config::{
    FileBatchConfig, FileBudgetConfig, FileConfig, FileEndpointConfig, FileLoggingConfig,
    FileStrategiesConfig,
};
pub use error::ConfigError;
pub use loader::ConfigLoader;
