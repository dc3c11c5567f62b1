//! File-backed question input and answer checkpoints.

mod json_store;

pub use json_store::{JsonAnswerStore, load_questions, read_raw_answers};
