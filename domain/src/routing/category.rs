//! Question category value object

use serde::{Deserialize, Serialize};

/// Label assigned to a question by the classifier
///
/// The set is closed; any other label the model produces is kept verbatim
/// in [`Category::Unrecognized`] and routed to the fallback strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Math,
    Commonsense,
    FuturePrediction,
    Planning,
    Coding,
    Unrecognized(String),
}

impl Category {
    /// Labels the classifier is asked to choose from
    pub const LABELS: [&'static str; 5] =
        ["math", "commonsense", "future_prediction", "coding", "planning"];

    /// Parse a classifier reply (trimmed and lower-cased first)
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "math" => Category::Math,
            "commonsense" => Category::Commonsense,
            "future_prediction" => Category::FuturePrediction,
            "planning" => Category::Planning,
            "coding" => Category::Coding,
            _ => Category::Unrecognized(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Math => "math",
            Category::Commonsense => "commonsense",
            Category::FuturePrediction => "future_prediction",
            Category::Planning => "planning",
            Category::Coding => "coding",
            Category::Unrecognized(label) => label,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Unrecognized(_))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Unrecognized(label) => write!(f, "unrecognized({})", label),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
