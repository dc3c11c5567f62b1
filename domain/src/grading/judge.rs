//! LLM-as-judge protocol: a strict True/False grader

use super::normalize::normalize_whitespace;

/// Prompts for the judge call
pub struct JudgePrompt;

impl JudgePrompt {
    pub fn system() -> &'static str {
        "You are a strict grader. Reply with exactly True or False. No punctuation. No explanation."
    }

    pub fn user(question: &str, prediction: &str, expected: &str) -> String {
        format!(
            r#"You are grading a question-answer pair.

Return exactly True if the PREDICTION would be accepted as correct for the EXPECTED_ANSWER.
Otherwise, return False.

QUESTION:
{}

PREDICTION:
{}

EXPECTED_ANSWER:
{}

Answer with exactly: True or False"#,
            question, prediction, expected
        )
    }

    /// System prompt for the direct (unrouted) solver used by the harness
    pub fn solver_system() -> &'static str {
        "You are a careful solver. Reply ONLY with the final answer, nothing else."
    }
}

/// Interpret a judge reply; `None` when it is neither True nor False
pub fn parse_judge_reply(reply: &str) -> Option<bool> {
    let reply = reply.trim().to_lowercase();
    if reply.starts_with("true") {
        Some(true)
    } else if reply.starts_with("false") {
        Some(false)
    } else {
        None
    }
}

/// Verdict to use when the judge reply is malformed
pub fn fallback_verdict(prediction: &str, expected: &str) -> bool {
    normalize_whitespace(prediction) == normalize_whitespace(expected)
}
