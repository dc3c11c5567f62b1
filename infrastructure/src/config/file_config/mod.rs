//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application parameters.

mod batch;
mod endpoint;
mod logging;
mod strategies;

pub use batch::{FileBatchConfig, FileBudgetConfig};
pub use endpoint::FileEndpointConfig;
pub use logging::FileLoggingConfig;
pub use strategies::FileStrategiesConfig;

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use strata_application::{BatchParams, StrategyParams};
use strata_domain::{ConfigIssue, ConfigIssueCode, StrategyKind};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote endpoint
    pub endpoint: FileEndpointConfig,
    /// Per-question call budget
    pub budget: FileBudgetConfig,
    /// Batch input/output and range
    pub batch: FileBatchConfig,
    /// Strategy sampling and loop bounds
    pub strategies: FileStrategiesConfig,
    /// Log file and call transcript
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    pub fn strategy_params(&self) -> StrategyParams {
        self.strategies.to_params()
    }

    pub fn batch_params(&self) -> BatchParams {
        BatchParams::default()
            .with_range(self.batch.start, self.batch.end)
            .with_checkpoint_every(self.batch.checkpoint_every)
            .with_max_calls(self.budget.max_calls)
    }

    /// Fail on error-severity issues; return the remaining warnings
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.endpoint.model.trim().is_empty() {
            issues.push(empty("endpoint.model"));
        }
        if self.endpoint.base_url.trim().is_empty() {
            issues.push(empty("endpoint.base_url"));
        }
        if self.endpoint.timeout_secs == 0 {
            issues.push(zero("endpoint.timeout_secs"));
        }
        if self.budget.max_calls == 0 {
            issues.push(zero("budget.max_calls"));
        }
        if self.batch.start == 0 {
            issues.push(zero("batch.start"));
        }
        if self.batch.checkpoint_every == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroValue {
                    field: "batch.checkpoint_every".to_string(),
                },
                "batch.checkpoint_every is 0: only the final write will be made",
            ));
        }
        if let Some(end) = self.batch.end.filter(|end| *end < self.batch.start) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvertedRange {
                    start: self.batch.start,
                    end,
                },
                format!("batch.start ({}) is past batch.end ({})", self.batch.start, end),
            ));
        }

        let temperature = self.strategies.sample_temperature;
        if !(0.0..=1.0).contains(&temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TemperatureOutOfRange {
                    field: "strategies.sample_temperature".to_string(),
                    value: temperature,
                },
                format!("strategies.sample_temperature must be within [0, 1], got {}", temperature),
            ));
        }
        for (field, value) in [
            ("strategies.vote_samples", self.strategies.vote_samples),
            ("strategies.future_samples", self.strategies.future_samples),
            ("strategies.verify_samples", self.strategies.verify_samples),
        ] {
            if value == 0 {
                issues.push(zero(field));
            }
        }

        // one classification call precedes every strategy
        let params = self.strategy_params();
        for kind in StrategyKind::ALL {
            let needed = params.worst_case_calls(kind) + 1;
            if self.budget.max_calls > 0 && needed > self.budget.max_calls {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::BudgetTooSmall {
                        strategy: kind.to_string(),
                        needed,
                        ceiling: self.budget.max_calls,
                    },
                    format!(
                        "{} may need {} calls but budget.max_calls is {}",
                        kind, needed, self.budget.max_calls
                    ),
                ));
            }
        }

        issues
    }
}

fn zero(field: &str) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::ZeroValue {
            field: field.to_string(),
        },
        format!("{} must be positive", field),
    )
}

fn empty(field: &str) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::EmptyValue {
            field: field.to_string(),
        },
        format!("{} must not be empty", field),
    )
}
