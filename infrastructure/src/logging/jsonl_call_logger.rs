//! JSONL transcript of remote calls.
//!
//! Each [`CallEvent`] becomes one JSON line carrying its payload fields plus
//! `type`, `seq` and an RFC 3339 `timestamp`. The file is opened in append
//! mode so a resumed batch extends the transcript of the interrupted one.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use strata_application::ports::call_logger::{CallEvent, CallLogger};
use serde_json::{Map, Value};

pub struct JsonlCallLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    seq: AtomicU64,
}

impl JsonlCallLogger {
    /// Open (or create) the transcript at `path`, creating parent directories
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            seq: AtomicU64::new(0),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(&self, event: CallEvent) -> Value {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("seq".to_string(), Value::from(seq));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        Value::Object(map)
    }
}

impl CallLogger for JsonlCallLogger {
    fn log(&self, event: CallEvent) {
        let record = self.record(event);
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // flush per line
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlCallLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("calls.jsonl");
        let logger = JsonlCallLogger::open(&path).unwrap();

        logger.log(CallEvent::new(
            "completion",
            json!({"stage": "classify", "status": 200, "reply": "math"}),
        ));
        logger.log(CallEvent::new("completion", json!({"stage": "math", "status": -1})));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "completion");
        assert_eq!(lines[0]["stage"], "classify");
        assert_eq!(lines[0]["seq"], 0);
        assert_eq!(lines[1]["seq"], 1);
        assert_eq!(lines[1]["status"], -1);
        assert!(lines[0]["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calls.jsonl");

        JsonlCallLogger::open(&path)
            .unwrap()
            .log(CallEvent::new("completion", json!({"call": 1})));
        JsonlCallLogger::open(&path)
            .unwrap()
            .log(CallEvent::new("completion", json!({"call": 2})));

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["call"], 2);
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calls.jsonl");
        let logger = JsonlCallLogger::open(&path).unwrap();

        logger.log(CallEvent::new("note", json!("batch resumed")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "batch resumed");
    }
}
