//! JSON files for questions and answers.
//!
//! Answers are written as a pretty-printed array of `{"output": ...}`
//! objects. Every save goes to a sibling temp file first and is then renamed
//! over the target, so a crash mid-write leaves the previous checkpoint.

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use strata_application::ports::answer_store::{AnswerStore, StoreError};
use strata_domain::{AnswerRecord, QuestionRecord};
use tracing::{debug, info};

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn read_array(path: &Path) -> Result<Vec<Value>, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let value: Value = serde_json::from_str(&text).map_err(|source| StoreError::Format {
        path: path.display().to_string(),
        source,
    })?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(StoreError::NotAnArray {
            path: path.display().to_string(),
        }),
    }
}

/// Read the input file: a JSON array of question objects
pub fn load_questions(path: &Path) -> Result<Vec<QuestionRecord>, StoreError> {
    let questions: Vec<_> = read_array(path)?
        .into_iter()
        .map(QuestionRecord::new)
        .collect();
    info!(path = %path.display(), count = questions.len(), "Loaded questions");
    Ok(questions)
}

/// Read an answers file as raw JSON elements, for validation
pub fn read_raw_answers(path: &Path) -> Result<Vec<Value>, StoreError> {
    read_array(path)
}

/// Answers array persisted as one JSON file
pub struct JsonAnswerStore {
    path: PathBuf,
}

impl JsonAnswerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "answers.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl AnswerStore for JsonAnswerStore {
    fn load(&self, total: usize) -> Result<Vec<AnswerRecord>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No answers file, starting from placeholders");
            return Ok(AnswerRecord::placeholders(total));
        }

        let path = self.path.display().to_string();
        let answers: Vec<AnswerRecord> = read_array(&self.path)?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()
            .map_err(|source| StoreError::Format {
                path: path.clone(),
                source,
            })?;

        if answers.len() != total {
            return Err(StoreError::LengthMismatch {
                path,
                expected: total,
                found: answers.len(),
            });
        }
        let pending = answers.iter().filter(|a| a.is_placeholder()).count();
        info!(path = %path, pending, "Resuming from existing answers");
        Ok(answers)
    }

    fn save(&self, answers: &[AnswerRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let json = serde_json::to_string_pretty(answers).map_err(|source| StoreError::Format {
            path: self.path.display().to_string(),
            source,
        })?;

        let temp = self.temp_path();
        let mut file = fs::File::create(&temp).map_err(|e| io_error(&temp, e))?;
        file.write_all(json.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| io_error(&temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| io_error(&self.path, e))?;

        debug!(path = %self.path.display(), count = answers.len(), "Saved answers");
        Ok(())
    }
}
