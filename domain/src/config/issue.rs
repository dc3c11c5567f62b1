//! Configuration issues reported by config validation.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the run cannot proceed with this configuration.
    Error,
    /// Non-fatal: the run proceeds but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A numeric setting that must be positive is zero.
    ZeroValue { field: String },
    /// A required string setting is empty.
    EmptyValue { field: String },
    /// `batch.start` is past `batch.end`.
    InvertedRange { start: usize, end: usize },
    /// A sampling temperature outside `[0, 1]`.
    TemperatureOutOfRange { field: String, value: f64 },
    /// Worst-case calls of a strategy exceed the per-question budget.
    BudgetTooSmall { strategy: String, needed: usize, ceiling: usize },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let issue = ConfigIssue::error(
            ConfigIssueCode::ZeroValue {
                field: "budget.max_calls".to_string(),
            },
            "budget.max_calls must be positive",
        );
        assert!(issue.is_error());

        let issue = ConfigIssue::warning(
            ConfigIssueCode::InvertedRange { start: 9, end: 3 },
            "nothing to do",
        );
        assert!(!issue.is_error());
    }

    #[test]
    fn test_temperature_code_compares_by_value() {
        let code = ConfigIssueCode::TemperatureOutOfRange {
            field: "strategies.sample_temperature".to_string(),
            value: 1.5,
        };
        let issue = ConfigIssue::error(code.clone(), "out of range");

        assert_eq!(issue.code, code);
        assert_ne!(
            issue.code,
            ConfigIssueCode::TemperatureOutOfRange {
                field: "strategies.sample_temperature".to_string(),
                value: 0.5,
            }
        );
    }
}
