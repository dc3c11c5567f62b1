//! Question record value object

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the input question file (Value Object)
///
/// The record keeps the raw JSON object so that extra fields survive a
/// round trip. The prompt text is the `input` field; records without a
/// usable `input` fall back to their full JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionRecord {
    raw: Value,
}

impl QuestionRecord {
    /// Wrap a raw JSON entry
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Build a record from bare question text
    pub fn from_input(input: impl Into<String>) -> Self {
        Self {
            raw: serde_json::json!({ "input": input.into() }),
        }
    }

    /// Text sent to the router for this record
    pub fn prompt_text(&self) -> String {
        match self.raw.get("input").and_then(Value::as_str) {
            Some(input) if !input.is_empty() => input.to_string(),
            _ => self.raw.to_string(),
        }
    }

    /// The raw JSON entry
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl From<&str> for QuestionRecord {
    fn from(s: &str) -> Self {
        QuestionRecord::from_input(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_text_uses_input_field() {
        let q = QuestionRecord::new(json!({"input": "What is 2+2?", "domain": "math"}));
        assert_eq!(q.prompt_text(), "What is 2+2?");
    }

    #[test]
    fn test_prompt_text_falls_back_to_json() {
        let q = QuestionRecord::new(json!({"input": "", "question": "Why?"}));
        assert!(q.prompt_text().contains("\"question\":\"Why?\""));

        let q = QuestionRecord::new(json!({"prompt": "no input key"}));
        assert!(q.prompt_text().contains("no input key"));
    }

    #[test]
    fn test_deserialize_keeps_extra_fields() {
        let q: QuestionRecord =
            serde_json::from_str(r#"{"input": "Q", "expected": "A"}"#).unwrap();
        assert_eq!(q.raw()["expected"], "A");
    }

    #[test]
    fn test_from_str() {
        let q: QuestionRecord = "Explain why the sky is blue.".into();
        assert_eq!(q.prompt_text(), "Explain why the sky is blue.");
    }
}
