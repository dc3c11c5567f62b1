//! Evaluate use case
//!
//! Runs graded test cases against the endpoint, either with the bare solver
//! prompt or through the full router, and scores each reply with the local
//! grader or an LLM judge.

use super::route_question::RouteQuestionUseCase;
use crate::ports::completion_client::CompletionClient;
use crate::session::{CallError, CallSession};
use serde::Serialize;
use std::time::Duration;
use strata_domain::grading::{JudgePrompt, fallback_verdict, grade, parse_judge_reply};
use strata_domain::{CallBudget, TestCase};
use tracing::{debug, info, warn};

/// Pause between test cases
pub const DEFAULT_PACING: Duration = Duration::from_millis(200);

/// How predictions are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverMode {
    /// One call with a "final answer only" system prompt
    #[default]
    Direct,
    /// Classify and dispatch like a batch question
    Routed,
}

/// How predictions are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraderMode {
    /// Numeric or normalized-text comparison
    #[default]
    Local,
    /// A strict True/False judge call, with a local fallback
    Judge,
}

/// Input for the Evaluate use case
#[derive(Debug, Clone)]
pub struct EvaluateInput {
    pub cases: Vec<TestCase>,
    pub solver: SolverMode,
    pub grader: GraderMode,
}

impl EvaluateInput {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self {
            cases,
            solver: SolverMode::default(),
            grader: GraderMode::default(),
        }
    }

    pub fn routed(mut self) -> Self {
        self.solver = SolverMode::Routed;
        self
    }

    pub fn judged(mut self) -> Self {
        self.grader = GraderMode::Judge;
        self
    }
}

/// Result for one test case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRow {
    pub id: String,
    pub expected: String,
    pub got: String,
    pub correct: bool,
    /// Error text when the prediction call failed
    pub error: Option<String>,
}

/// All rows of one evaluation run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub rows: Vec<EvaluationRow>,
}

impl EvaluationReport {
    pub fn correct(&self) -> usize {
        self.rows.iter().filter(|r| r.correct).count()
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// `Score: k/n correct`
    pub fn score_line(&self) -> String {
        format!("Score: {}/{} correct", self.correct(), self.total())
    }
}

/// Use case for the grading harness
pub struct EvaluateUseCase<C: CompletionClient + 'static> {
    router: RouteQuestionUseCase<C>,
    max_calls: usize,
    pacing: Duration,
}

impl<C: CompletionClient + 'static> EvaluateUseCase<C> {
    pub fn new(router: RouteQuestionUseCase<C>, max_calls: usize) -> Self {
        Self {
            router,
            max_calls,
            pacing: DEFAULT_PACING,
        }
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub async fn execute(&self, input: EvaluateInput) -> EvaluationReport {
        info!(
            cases = input.cases.len(),
            solver = ?input.solver,
            grader = ?input.grader,
            "Starting evaluation"
        );
        let mut report = EvaluationReport::default();

        for (i, case) in input.cases.iter().enumerate() {
            if i > 0 && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }

            let (got, error) = match self.predict(case, input.solver).await {
                Ok(got) => (got, None),
                Err(e) => {
                    warn!(case = %case.id, "Prediction failed: {}", e);
                    (String::new(), Some(e.to_string()))
                }
            };

            let correct = match input.grader {
                GraderMode::Local => grade(&case.expected, &got, case.kind),
                GraderMode::Judge => self.judge(case, &got).await,
            };
            debug!(case = %case.id, correct, "Graded");

            report.rows.push(EvaluationRow {
                id: case.id.clone(),
                expected: case.expected.clone(),
                got,
                correct,
                error,
            });
        }

        info!("{}", report.score_line());
        report
    }

    async fn predict(&self, case: &TestCase, solver: SolverMode) -> Result<String, CallError> {
        match solver {
            SolverMode::Direct => {
                let mut session = self.session();
                session.set_stage("eval-solve");
                session
                    .invoke(&case.prompt, 0.0, Some(JudgePrompt::solver_system()))
                    .await
            }
            SolverMode::Routed => Ok(self.router.execute(&case.prompt).await?.answer),
        }
    }

    /// Ask the judge; fall back to whitespace-normalized equality on a malformed reply
    async fn judge(&self, case: &TestCase, got: &str) -> bool {
        let mut session = self.session();
        session.set_stage("eval-judge");
        let reply = session
            .invoke(
                &JudgePrompt::user(&case.prompt, got, &case.expected),
                0.0,
                Some(JudgePrompt::system()),
            )
            .await;

        match reply.as_deref().map(parse_judge_reply) {
            Ok(Some(verdict)) => verdict,
            Ok(None) => {
                debug!(case = %case.id, "Malformed judge reply, comparing text");
                fallback_verdict(got, &case.expected)
            }
            Err(e) => {
                warn!(case = %case.id, "Judge call failed, comparing text: {}", e);
                fallback_verdict(got, &case.expected)
            }
        }
    }

    fn session(&self) -> CallSession<'_> {
        self.router.open_session(CallBudget::new(self.max_calls))
    }
}
