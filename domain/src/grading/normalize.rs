//! Answer normalization for grading

use super::case::GradeKind;
use regex::Regex;
use std::sync::LazyLock;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d+(\.\d+)?").expect("valid number pattern"));
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\-']").expect("valid punctuation pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Synonyms collapsed onto the canonical expected answers
const SYNONYMS: &[(&str, &str)] = &[
    ("unchanged", "stay the same"),
    ("no change", "stay the same"),
    ("same", "stay the same"),
    ("second place", "second"),
    ("2nd", "second"),
    ("first place", "first"),
    ("third place", "third"),
];

/// Lower-case, strip punctuation, collapse whitespace, map synonyms
pub fn normalize_text(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, " ");
    let collapsed = WHITESPACE.replace_all(&stripped, " ").trim().to_string();
    SYNONYMS
        .iter()
        .find(|(from, _)| *from == collapsed)
        .map(|(_, to)| to.to_string())
        .unwrap_or(collapsed)
}

/// Lower-case and collapse whitespace only
pub fn normalize_whitespace(s: &str) -> String {
    WHITESPACE
        .replace_all(s.trim(), " ")
        .to_lowercase()
}

/// First number occurring in the string
pub fn extract_number(s: &str) -> Option<&str> {
    NUMBER.find(s).map(|m| m.as_str())
}

/// Whether `got` matches `expected` under the case's comparison rule
pub fn grade(expected: &str, got: &str, kind: GradeKind) -> bool {
    match kind {
        GradeKind::Numeric => match (extract_number(expected), extract_number(got)) {
            (Some(exp), Some(got)) => exp == got,
            _ => false,
        },
        GradeKind::Text => normalize_text(got) == normalize_text(expected),
    }
}
