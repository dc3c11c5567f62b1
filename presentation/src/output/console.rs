//! Console output formatter for answers, batch summaries and evaluation reports

use colored::Colorize;
use std::path::Path;
use strata_application::{BatchSummary, EvaluationReport, RoutedAnswer};
use strata_domain::{ConfigIssue, Severity, ValidationError};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single routed answer
    pub fn format_answer(routed: &RoutedAnswer) -> String {
        let route = match &routed.category {
            Some(category) => format!("{} -> {}", category, routed.strategy),
            None => routed.strategy.to_string(),
        };
        format!(
            "{} {} ({} calls)\n\n{}\n",
            "Route:".cyan().bold(),
            route,
            routed.calls,
            routed.answer
        )
    }

    /// Format the end-of-run summary
    pub fn format_summary(summary: &BatchSummary, output: &Path) -> String {
        let mut out = Self::section_header("Batch Summary");
        out.push_str(&format!("  {} {}\n", "Answered:".bold(), summary.answered()));
        if summary.failed > 0 {
            out.push_str(&format!("  {} {}\n", "Failed:".red().bold(), summary.failed));
        }
        out.push_str(&format!("  {} {}\n", "Skipped:".dimmed(), summary.skipped));
        out.push_str(&format!(
            "  {} {} ({} writes)\n",
            "Saved to:".bold(),
            output.display(),
            summary.checkpoints
        ));
        out
    }

    /// Format the evaluation report: score line, then one line per case
    pub fn format_report(report: &EvaluationReport) -> String {
        let score = report.score_line();
        let mut out = if report.correct() == report.total() {
            format!("{}\n", score.green().bold())
        } else {
            format!("{}\n", score.yellow().bold())
        };

        for row in &report.rows {
            let mark = if row.correct {
                "v".green()
            } else {
                "x".red()
            };
            out.push_str(&format!(
                "{} {}: expected={:?}, got={:?}\n",
                mark, row.id, row.expected, row.got
            ));
            if let Some(error) = &row.error {
                out.push_str(&format!("   {} {}\n", "error:".red(), error));
            }
        }
        out
    }

    /// Format as JSON
    pub fn format_report_json(report: &EvaluationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format config issues, errors first
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        let mut sorted: Vec<_> = issues.iter().collect();
        sorted.sort_by_key(|issue| issue.severity != Severity::Error);
        sorted
            .into_iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}\n", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}\n", "warning:".yellow().bold(), issue.message),
            })
            .collect()
    }

    /// Format an answer validation failure
    pub fn format_validation(error: &ValidationError, path: &Path) -> String {
        format!(
            "{} {}\n  * {}\n",
            "Validation failed:".red().bold(),
            path.display(),
            error
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
