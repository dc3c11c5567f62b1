//! Grading harness domain: test cases, answer normalization, and the
//! strict True/False judge protocol.

pub mod case;
pub mod judge;
mod normalize;

pub use case::{GradeKind, TestCase, builtin_cases};
pub use judge::{JudgePrompt, fallback_verdict, parse_judge_reply};
pub use normalize::{extract_number, grade, normalize_text, normalize_whitespace};
