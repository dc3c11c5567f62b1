//! Run Batch use case
//!
//! Walks a 1-based inclusive range of questions, answers every slot that
//! still holds a placeholder, and checkpoints the answers array through the
//! [`AnswerStore`] port.

use super::route_question::RouteQuestionUseCase;
use crate::config::BatchParams;
use crate::ports::answer_store::{AnswerStore, StoreError};
use crate::ports::completion_client::CompletionClient;
use crate::ports::progress::{BatchProgressNotifier, NoProgress, QuestionOutcome};
use crate::session::CallError;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use strata_domain::{AnswerRecord, CallBudget, DomainError, QuestionRange, QuestionRecord};
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that abort a batch run
///
/// Per-question failures never surface here; they are recorded in the
/// answer slot and the batch continues.
#[derive(Error, Debug)]
pub enum RunBatchError {
    #[error("Invalid batch range: {0}")]
    Range(#[from] DomainError),

    #[error("Answers array holds {found} slots but there are {expected} questions")]
    AnswerCountMismatch { expected: usize, found: usize },

    #[error("Checkpoint failed: {0}")]
    Store(#[from] StoreError),
}

/// Counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Positions that were routed (answered or failed)
    pub processed: usize,
    /// Positions that already held an answer
    pub skipped: usize,
    /// Positions whose processing failed
    pub failed: usize,
    /// Checkpoint writes, including the final one
    pub checkpoints: usize,
}

impl BatchSummary {
    pub fn answered(&self) -> usize {
        self.processed - self.failed
    }
}

/// Output of a batch run
#[derive(Debug, Clone)]
pub struct RunBatchOutput {
    pub answers: Vec<AnswerRecord>,
    pub summary: BatchSummary,
}

/// Use case for answering a batch of questions with checkpointed resumption
pub struct RunBatchUseCase<C: CompletionClient + 'static> {
    router: RouteQuestionUseCase<C>,
    store: Arc<dyn AnswerStore>,
    params: BatchParams,
}

impl<C: CompletionClient + 'static> RunBatchUseCase<C> {
    pub fn new(
        router: RouteQuestionUseCase<C>,
        store: Arc<dyn AnswerStore>,
        params: BatchParams,
    ) -> Self {
        Self {
            router,
            store,
            params,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        questions: &[QuestionRecord],
        answers: Vec<AnswerRecord>,
    ) -> Result<RunBatchOutput, RunBatchError> {
        self.execute_with_progress(questions, answers, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        questions: &[QuestionRecord],
        mut answers: Vec<AnswerRecord>,
        progress: &dyn BatchProgressNotifier,
    ) -> Result<RunBatchOutput, RunBatchError> {
        if answers.len() != questions.len() {
            return Err(RunBatchError::AnswerCountMismatch {
                expected: questions.len(),
                found: answers.len(),
            });
        }
        let range = QuestionRange::resolve(self.params.start, self.params.end, questions.len())?;
        info!(
            start = range.start(),
            end = range.end(),
            total = questions.len(),
            "Starting batch"
        );
        progress.on_batch_start(range.len());

        let mut summary = BatchSummary::default();
        for position in range.positions() {
            let slot = position - 1;

            if !answers[slot].is_placeholder() {
                debug!(position, "Already answered, skipping");
                summary.skipped += 1;
                progress.on_question_complete(position, QuestionOutcome::Skipped);
                continue;
            }

            let question = questions[slot].prompt_text();
            let outcome = AssertUnwindSafe(self.answer_one(position, &question, progress))
                .catch_unwind()
                .await;

            let (record, outcome) = match outcome {
                Ok(Ok(answer)) => (AnswerRecord::new(answer), QuestionOutcome::Answered),
                Ok(Err(e)) => {
                    error!(position, "Question failed: {}", e);
                    (AnswerRecord::failure(position, e), QuestionOutcome::Failed)
                }
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    error!(position, "Question panicked: {}", message);
                    (AnswerRecord::failure(position, message), QuestionOutcome::Failed)
                }
            };

            summary.processed += 1;
            if outcome == QuestionOutcome::Failed {
                summary.failed += 1;
            }
            answers[slot] = record;
            progress.on_question_complete(position, outcome);

            // skipped positions never checkpoint
            if self.params.is_checkpoint(position) {
                self.store.save(&answers)?;
                summary.checkpoints += 1;
                info!(position, "Checkpoint saved");
                progress.on_checkpoint(position);
            }
        }

        self.store.save(&answers)?;
        summary.checkpoints += 1;
        progress.on_batch_complete();
        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            "Batch complete"
        );

        Ok(RunBatchOutput { answers, summary })
    }

    async fn answer_one(
        &self,
        position: usize,
        question: &str,
        progress: &dyn BatchProgressNotifier,
    ) -> Result<String, CallError> {
        let mut session = self
            .router
            .open_session(CallBudget::new(self.params.max_calls))
            .for_position(position);

        let routed = self
            .router
            .route(&mut session, question, |category, strategy| {
                progress.on_question_routed(position, category, strategy)
            })
            .await?;
        debug!(position, calls = routed.calls, "Question answered");
        Ok(routed.answer)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("panic: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("panic: {}", s)
    } else {
        "panic: unknown cause".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategyParams;
    use crate::ports::completion_client::{
        Completion, CompletionError, CompletionRequest,
    };
    use crate::session::testing::ScriptedClient;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use strata_domain::{Category, StrategyKind};

    /// Records every snapshot it is asked to save
    #[derive(Default)]
    struct MemoryStore {
        saves: Mutex<Vec<Vec<AnswerRecord>>>,
    }

    impl MemoryStore {
        fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }
    }

    impl AnswerStore for MemoryStore {
        fn load(&self, total: usize) -> Result<Vec<AnswerRecord>, StoreError> {
            Ok(AnswerRecord::placeholders(total))
        }

        fn save(&self, answers: &[AnswerRecord]) -> Result<(), StoreError> {
            self.saves.lock().unwrap().push(answers.to_vec());
            Ok(())
        }
    }

    /// Classifies everything as unrecognized and answers with the question text
    struct EchoQuestionClient;

    #[async_trait]
    impl CompletionClient for EchoQuestionClient {
        fn model(&self) -> &str {
            "echo-question"
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<Completion, CompletionError> {
            if request.system.starts_with("Return only one label") {
                return Ok(Completion::new("other", 200));
            }
            let question = request.prompt.lines().next().unwrap_or("").to_string();
            if question == "boom" {
                panic!("model exploded");
            }
            if question == "fail" {
                return Err(CompletionError::Http {
                    status: 500,
                    detail: "server error".into(),
                });
            }
            Ok(Completion::new(format!("Final Answer: {}", question), 200))
        }
    }

    fn questions(texts: &[&str]) -> Vec<QuestionRecord> {
        texts.iter().map(|t| QuestionRecord::from_input(*t)).collect()
    }

    fn batch<C: CompletionClient + 'static>(
        client: C,
        store: Arc<MemoryStore>,
        params: BatchParams,
    ) -> RunBatchUseCase<C> {
        let router = RouteQuestionUseCase::new(Arc::new(client), StrategyParams::default());
        RunBatchUseCase::new(router, store, params)
    }

    #[tokio::test]
    async fn test_resumption_skips_answered_slot() {
        let store = Arc::new(MemoryStore::default());
        let use_case = batch(EchoQuestionClient, store.clone(), BatchParams::default());
        let qs = questions(&["q1", "q2", "q3", "q4", "q5"]);
        let mut answers = AnswerRecord::placeholders(5);
        answers[2] = AnswerRecord::new("kept");

        let output = use_case.execute(&qs, answers).await.unwrap();

        let outputs: Vec<_> = output.answers.iter().map(|a| a.output.as_str()).collect();
        assert_eq!(outputs, vec!["q1", "q2", "kept", "q4", "q5"]);
        assert_eq!(output.summary.processed, 4);
        assert_eq!(output.summary.skipped, 1);
        assert_eq!(output.summary.failed, 0);
    }

    #[tokio::test]
    async fn test_failures_are_recorded_and_batch_continues() {
        let store = Arc::new(MemoryStore::default());
        let use_case = batch(EchoQuestionClient, store.clone(), BatchParams::default());
        let qs = questions(&["fail", "boom", "ok"]);

        let output = use_case
            .execute(&qs, AnswerRecord::placeholders(3))
            .await
            .unwrap();

        assert_eq!(
            output.answers[0].output,
            "Error processing question 1: ERROR status=500 server error"
        );
        assert_eq!(
            output.answers[1].output,
            "Error processing question 2: panic: model exploded"
        );
        assert_eq!(output.answers[2].output, "ok");
        assert_eq!(output.summary.failed, 2);
        assert_eq!(output.summary.answered(), 1);
    }

    #[tokio::test]
    async fn test_range_limits_processing() {
        let store = Arc::new(MemoryStore::default());
        let params = BatchParams::default().with_range(2, Some(3));
        let use_case = batch(EchoQuestionClient, store.clone(), params);
        let qs = questions(&["q1", "q2", "q3", "q4"]);

        let output = use_case
            .execute(&qs, AnswerRecord::placeholders(4))
            .await
            .unwrap();

        assert!(output.answers[0].is_placeholder());
        assert_eq!(output.answers[1].output, "q2");
        assert_eq!(output.answers[2].output, "q3");
        assert!(output.answers[3].is_placeholder());
    }

    #[tokio::test]
    async fn test_range_end_is_clamped() {
        let store = Arc::new(MemoryStore::default());
        let params = BatchParams::default().with_range(1, Some(6208));
        let use_case = batch(EchoQuestionClient, store, params);
        let output = use_case
            .execute(&questions(&["a", "b"]), AnswerRecord::placeholders(2))
            .await
            .unwrap();
        assert_eq!(output.summary.processed, 2);
    }

    #[tokio::test]
    async fn test_checkpoints_on_multiples_and_at_end() {
        let store = Arc::new(MemoryStore::default());
        let params = BatchParams::default().with_checkpoint_every(2);
        let use_case = batch(EchoQuestionClient, store.clone(), params);
        let qs = questions(&["a", "b", "c", "d", "e"]);

        let output = use_case
            .execute(&qs, AnswerRecord::placeholders(5))
            .await
            .unwrap();

        // after positions 2 and 4, then the final write
        assert_eq!(store.save_count(), 3);
        assert_eq!(output.summary.checkpoints, 3);
        let saves = store.saves.lock().unwrap();
        assert_eq!(saves[0][1].output, "b");
        assert!(saves[0][2].is_placeholder());
        assert_eq!(saves[2][4].output, "e");
    }

    #[tokio::test]
    async fn test_skipped_positions_do_not_checkpoint() {
        let store = Arc::new(MemoryStore::default());
        let params = BatchParams::default().with_checkpoint_every(2);
        let use_case = batch(EchoQuestionClient, store.clone(), params);
        let qs = questions(&["a", "b", "c", "d"]);
        let mut answers = AnswerRecord::placeholders(4);
        answers[1] = AnswerRecord::new("kept");

        let output = use_case.execute(&qs, answers).await.unwrap();

        // position 2 was skipped; only position 4 and the final write save
        assert_eq!(store.save_count(), 2);
        assert_eq!(output.summary.checkpoints, 2);
        let saves = store.saves.lock().unwrap();
        assert_eq!(saves[0][3].output, "d");
    }

    /// Records routing and completion callbacks
    #[derive(Default)]
    struct RecordingProgress {
        routed: Mutex<Vec<(usize, Category, StrategyKind)>>,
        completed: Mutex<Vec<(usize, QuestionOutcome)>>,
    }

    impl BatchProgressNotifier for RecordingProgress {
        fn on_batch_start(&self, _total: usize) {}

        fn on_question_routed(&self, position: usize, category: &Category, strategy: StrategyKind) {
            self.routed
                .lock()
                .unwrap()
                .push((position, category.clone(), strategy));
        }

        fn on_question_complete(&self, position: usize, outcome: QuestionOutcome) {
            self.completed.lock().unwrap().push((position, outcome));
        }

        fn on_batch_complete(&self) {}
    }

    #[tokio::test]
    async fn test_progress_sees_routing_for_processed_questions() {
        let store = Arc::new(MemoryStore::default());
        let use_case = batch(EchoQuestionClient, store, BatchParams::default());
        let mut answers = AnswerRecord::placeholders(2);
        answers[0] = AnswerRecord::new("kept");
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress(&questions(&["a", "b"]), answers, &progress)
            .await
            .unwrap();

        assert_eq!(
            *progress.routed.lock().unwrap(),
            vec![(
                2,
                Category::Unrecognized("other".to_string()),
                StrategyKind::ChainOfThought
            )]
        );
        assert_eq!(
            *progress.completed.lock().unwrap(),
            vec![(1, QuestionOutcome::Skipped), (2, QuestionOutcome::Answered)]
        );
    }

    #[tokio::test]
    async fn test_budget_is_fresh_per_question() {
        let store = Arc::new(MemoryStore::default());
        let client = ScriptedClient::new([
            "other", "Final Answer: one",
            "other", "Final Answer: two",
        ]);
        let params = BatchParams::default().with_max_calls(2);
        let use_case = batch(client, store, params);

        let output = use_case
            .execute(&questions(&["1", "2"]), AnswerRecord::placeholders(2))
            .await
            .unwrap();

        assert_eq!(output.answers[0].output, "one");
        assert_eq!(output.answers[1].output, "two");
    }

    #[tokio::test]
    async fn test_budget_exhaustion_is_recorded() {
        let store = Arc::new(MemoryStore::default());
        let client = ScriptedClient::new(["other", "Final Answer: x"]);
        let params = BatchParams::default().with_max_calls(1);
        let use_case = batch(client, store, params);

        let output = use_case
            .execute(&questions(&["q"]), AnswerRecord::placeholders(1))
            .await
            .unwrap();

        assert_eq!(
            output.answers[0].output,
            "Error processing question 1: ERROR: max call limit reached"
        );
    }

    #[tokio::test]
    async fn test_mismatched_answers_are_rejected() {
        let store = Arc::new(MemoryStore::default());
        let use_case = batch(EchoQuestionClient, store, BatchParams::default());
        let err = use_case
            .execute(&questions(&["a", "b"]), AnswerRecord::placeholders(3))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RunBatchError::AnswerCountMismatch { expected: 2, found: 3 }
        ));
    }

    #[tokio::test]
    async fn test_invalid_range_is_rejected() {
        let store = Arc::new(MemoryStore::default());
        let params = BatchParams::default().with_range(3, Some(2));
        let use_case = batch(EchoQuestionClient, store, params);
        let err = use_case
            .execute(&questions(&["a", "b", "c"]), AnswerRecord::placeholders(3))
            .await
            .unwrap_err();
        assert!(matches!(err, RunBatchError::Range(_)));
    }
}
