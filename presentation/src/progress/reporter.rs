//! Progress reporting for batch runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use strata_application::ports::progress::{BatchProgressNotifier, QuestionOutcome};
use strata_domain::{Category, StrategyKind};

/// Reports batch progress with a progress bar
pub struct BatchProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl BatchProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(bar) = guard.as_ref()
        {
            f(bar);
        }
    }
}

impl Default for BatchProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgressNotifier for BatchProgressReporter {
    fn on_batch_start(&self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(Self::style());
        bar.set_prefix("Answering");
        bar.set_message("Starting...");
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn on_question_routed(&self, position: usize, category: &Category, strategy: StrategyKind) {
        self.with_bar(|bar| bar.set_message(format!("#{} {} -> {}", position, category, strategy)));
    }

    fn on_question_complete(&self, position: usize, outcome: QuestionOutcome) {
        self.with_bar(|bar| {
            let status = match outcome {
                QuestionOutcome::Answered => format!("{} #{}", "v".green(), position),
                QuestionOutcome::Failed => format!("{} #{}", "x".red(), position),
                QuestionOutcome::Skipped => format!("{} #{}", "-".dimmed(), position),
            };
            bar.set_message(status);
            bar.inc(1);
        });
    }

    fn on_checkpoint(&self, position: usize) {
        self.with_bar(|bar| bar.println(format!("  {} checkpoint at #{}", "->".cyan(), position)));
    }

    fn on_batch_complete(&self) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(bar) = guard.take()
        {
            bar.finish_with_message(format!("{}", "complete!".green()));
        }
    }
}

/// Simple text-based progress (no progress bar), one line per question
pub struct SimpleBatchProgress;

impl BatchProgressNotifier for SimpleBatchProgress {
    fn on_batch_start(&self, total: usize) {
        println!("{} {} ({} questions)", "->".cyan(), "Batch".bold(), total);
    }

    fn on_question_complete(&self, position: usize, outcome: QuestionOutcome) {
        match outcome {
            QuestionOutcome::Answered => println!("  {} #{}", "v".green(), position),
            QuestionOutcome::Failed => println!("  {} #{} (failed)", "x".red(), position),
            QuestionOutcome::Skipped => {}
        }
    }

    fn on_checkpoint(&self, position: usize) {
        println!("  {} checkpoint at #{}", "->".cyan(), position);
    }

    fn on_batch_complete(&self) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_lifecycle_without_terminal() {
        let reporter = BatchProgressReporter::new();
        reporter.on_question_complete(1, QuestionOutcome::Answered);
        reporter.on_batch_start(2);
        reporter.on_question_routed(1, &Category::Math, StrategyKind::Math);
        reporter.on_question_complete(1, QuestionOutcome::Answered);
        reporter.on_question_complete(2, QuestionOutcome::Skipped);
        reporter.on_batch_complete();
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
