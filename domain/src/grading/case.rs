//! Evaluation test cases

use serde::{Deserialize, Serialize};

/// How an expected answer is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeKind {
    /// Compare the first number found in each string
    Numeric,
    /// Compare normalized text
    #[default]
    Text,
}

/// One graded prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: GradeKind,
    pub prompt: String,
    pub expected: String,
}

impl TestCase {
    pub fn new(
        id: impl Into<String>,
        kind: GradeKind,
        prompt: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            prompt: prompt.into(),
            expected: expected.into(),
        }
    }
}

/// Smoke cases run by `strata eval` when no case file is given
pub fn builtin_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(
            "math_inequality",
            GradeKind::Numeric,
            "Solve for the smallest integer n such that 3n + 5 > 26. Answer with just the integer.",
            "8",
        ),
        TestCase::new(
            "commonsense_ice",
            GradeKind::Text,
            "You place an ice cube in a glass of water and mark the water level. \
             After the ice melts, does the water level rise, fall, or stay the same? \
             Answer with exactly one of: 'rise', 'fall', 'stay the same'.",
            "stay the same",
        ),
        TestCase::new(
            "logic_race",
            GradeKind::Text,
            "In a race, you pass the person in second place. What position are you now in? \
             Answer with a single word like 'first', 'second', 'third'.",
            "second",
        ),
    ]
}
