//! Answer extraction from free-form model replies.
//!
//! Pure text pattern matching over completion text. No I/O.
//!
//! | Function | Used by | Marker |
//! |----------|---------|--------|
//! | [`extract_final_answer`] | chain-of-thought, math | `Final Answer:` (rest of text) |
//! | [`final_answer_line`] | self-consistency voting | `Final Answer:` (first line) |
//! | [`extract_boxed`] | future-event voting | `\boxed{` |
//! | [`filter_plan_lines`] | plan generation | `(` ... `)` lines |
//! | [`parse_review_verdict`] | code refinement | `VALID` / `FIX:` |

/// Marker that ends a reasoning trace
pub const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// Marker used by forecasting answers
pub const BOXED_MARKER: &str = "\\boxed{";

/// Text after the last `Final Answer:` marker, or the whole reply when absent.
///
/// Both cases are trimmed.
///
/// ```
/// use strata_domain::parsing::extract_final_answer;
///
/// assert_eq!(extract_final_answer("reasoning...\nFinal Answer: 42"), "42");
/// assert_eq!(extract_final_answer("  just 42 \n"), "just 42");
/// ```
pub fn extract_final_answer(text: &str) -> String {
    match text.rfind(FINAL_ANSWER_MARKER) {
        Some(idx) => text[idx + FINAL_ANSWER_MARKER.len()..].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// First line after the last `Final Answer:` marker, if the marker is present
pub fn final_answer_line(text: &str) -> Option<String> {
    let idx = text.rfind(FINAL_ANSWER_MARKER)?;
    let rest = text[idx + FINAL_ANSWER_MARKER.len()..].trim();
    Some(rest.lines().next().unwrap_or("").trim().to_string())
}

/// Whether the reply already carries a `Final Answer:` marker
pub fn has_final_answer(text: &str) -> bool {
    text.contains(FINAL_ANSWER_MARKER)
}

/// Content of the last `\boxed{` line, or the trimmed reply when absent.
///
/// The candidate runs from just after the marker to the end of that line;
/// a single closing brace at the end is dropped.
pub fn extract_boxed(text: &str) -> String {
    let Some(idx) = text.rfind(BOXED_MARKER) else {
        return text.trim().to_string();
    };
    let line = text[idx + BOXED_MARKER.len()..]
        .lines()
        .next()
        .unwrap_or("")
        .trim();
    line.strip_suffix('}').unwrap_or(line).trim().to_string()
}

/// Keep only the parenthesised action lines of a plan, joined by newlines
pub fn filter_plan_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('(') && line.ends_with(')'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Outcome of one code review round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewVerdict {
    /// The code satisfies the task
    Valid,
    /// One corrective instruction for the patcher
    Fix(String),
}

/// Parse a reviewer reply: exactly `VALID` (case-insensitive) or a `FIX:` line.
///
/// Anything that is not `VALID` is treated as a fix request; the `FIX:`
/// prefix is stripped when present.
pub fn parse_review_verdict(reply: &str) -> ReviewVerdict {
    let trimmed = reply.trim();
    if trimmed.eq_ignore_ascii_case("VALID") {
        return ReviewVerdict::Valid;
    }
    let instruction = trimmed
        .strip_prefix("FIX:")
        .map(str::trim)
        .unwrap_or(trimmed);
    ReviewVerdict::Fix(instruction.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== extract_final_answer Tests ====================

    #[test]
    fn test_final_answer_after_marker() {
        assert_eq!(extract_final_answer("reasoning...\nFinal Answer: 42"), "42");
    }

    #[test]
    fn test_final_answer_uses_last_marker() {
        let text = "Final Answer: draft\nwait, recheck\nFinal Answer: 7 apples";
        assert_eq!(extract_final_answer(text), "7 apples");
    }

    #[test]
    fn test_final_answer_without_marker_is_trimmed_input() {
        assert_eq!(extract_final_answer("\n  The sky scatters blue light.  "), "The sky scatters blue light.");
    }

    // ==================== final_answer_line Tests ====================

    #[test]
    fn test_final_answer_line_takes_first_line() {
        let text = "Step 1...\nFinal Answer:\n  12\nbecause reasons";
        assert_eq!(final_answer_line(text), Some("12".to_string()));
    }

    #[test]
    fn test_final_answer_line_missing_marker() {
        assert_eq!(final_answer_line("no marker here"), None);
        assert!(!has_final_answer("no marker here"));
    }

    // ==================== extract_boxed Tests ====================

    #[test]
    fn test_boxed_extraction() {
        let text = "The forecast favours growth.\n\\boxed{Yes}\nThat is all.";
        assert_eq!(extract_boxed(text), "Yes");
    }

    #[test]
    fn test_boxed_fallback_to_raw() {
        assert_eq!(extract_boxed("  No box at all "), "No box at all");
    }

    #[test]
    fn test_boxed_unterminated_line() {
        assert_eq!(extract_boxed("answer: \\boxed{B, C"), "B, C");
    }

    // ==================== filter_plan_lines Tests ====================

    #[test]
    fn test_plan_filter_mixed_output() {
        assert_eq!(
            filter_plan_lines("Step 1: think\n(lift a b c d)\nDone."),
            "(lift a b c d)"
        );
    }

    #[test]
    fn test_plan_filter_keeps_order() {
        let text = "Plan:\n(unstack b a)\n  (put-down b)  \n(stack a c) extra\n(pick-up a)";
        assert_eq!(filter_plan_lines(text), "(unstack b a)\n(put-down b)\n(pick-up a)");
    }

    #[test]
    fn test_plan_filter_empty() {
        assert_eq!(filter_plan_lines("no actions"), "");
    }

    // ==================== parse_review_verdict Tests ====================

    #[test]
    fn test_verdict_valid() {
        assert_eq!(parse_review_verdict(" VALID \n"), ReviewVerdict::Valid);
        assert_eq!(parse_review_verdict("valid"), ReviewVerdict::Valid);
    }

    #[test]
    fn test_verdict_fix() {
        assert_eq!(
            parse_review_verdict("FIX: You forgot to return plt.gca()"),
            ReviewVerdict::Fix("You forgot to return plt.gca()".to_string())
        );
    }

    #[test]
    fn test_verdict_unformatted_is_fix() {
        assert_eq!(
            parse_review_verdict("The code looks mostly fine."),
            ReviewVerdict::Fix("The code looks mostly fine.".to_string())
        );
    }
}
