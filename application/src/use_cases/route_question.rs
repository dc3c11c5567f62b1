//! Route Question use case
//!
//! Classifies one question, dispatches it to the matching strategy and, for
//! math, optionally cross-checks the result with a verification vote.

use super::classify::classify_question;
use crate::config::StrategyParams;
use crate::ports::call_logger::{CallLogger, NoCallLogger};
use crate::ports::completion_client::CompletionClient;
use crate::session::{CallError, CallSession};
use crate::strategies::{SelfConsistency, build_strategy};
use std::sync::Arc;
use strata_domain::prompt::PromptTemplate;
use strata_domain::{CallBudget, Category, DEFAULT_MAX_CALLS, StrategyKind};
use tracing::{info, warn};

/// Result of routing one question
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedAnswer {
    /// Classifier output; `None` when the strategy was chosen explicitly
    pub category: Option<Category>,
    pub strategy: StrategyKind,
    pub answer: String,
    /// Remote calls spent on this question
    pub calls: usize,
}

/// Use case for answering a single question
pub struct RouteQuestionUseCase<C: CompletionClient + 'static> {
    client: Arc<C>,
    logger: Arc<dyn CallLogger>,
    params: StrategyParams,
    max_calls: usize,
}

impl<C: CompletionClient + 'static> RouteQuestionUseCase<C> {
    pub fn new(client: Arc<C>, params: StrategyParams) -> Self {
        Self {
            client,
            logger: Arc::new(NoCallLogger),
            params,
            max_calls: DEFAULT_MAX_CALLS,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn CallLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_max_calls(mut self, max_calls: usize) -> Self {
        self.max_calls = max_calls;
        self
    }

    pub fn params(&self) -> &StrategyParams {
        &self.params
    }

    /// A fresh session with its own budget
    pub fn open_session(&self, budget: CallBudget) -> CallSession<'_> {
        CallSession::new(self.client.as_ref(), budget).with_logger(self.logger.as_ref())
    }

    /// Classify, dispatch and answer `question` within a fresh budget
    pub async fn execute(&self, question: &str) -> Result<RoutedAnswer, CallError> {
        let mut session = self.open_session(CallBudget::new(self.max_calls));
        self.route(&mut session, question, |_, _| {}).await
    }

    /// Classify and dispatch inside an existing session
    ///
    /// `on_routed` fires once the strategy is chosen, before any strategy call.
    pub async fn route(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
        on_routed: impl FnOnce(&Category, StrategyKind),
    ) -> Result<RoutedAnswer, CallError> {
        let category = classify_question(session, question).await?;
        let strategy = StrategyKind::for_category(&category);
        session.set_category(&category);
        info!(category = %category, strategy = %strategy, "Routing question");
        on_routed(&category, strategy);

        let answer = self.dispatch(session, strategy, question).await?;
        Ok(RoutedAnswer {
            category: Some(category),
            strategy,
            answer,
            calls: session.calls_made(),
        })
    }

    /// Answer `question` with an explicit strategy, skipping classification
    pub async fn execute_with(
        &self,
        question: &str,
        strategy: StrategyKind,
    ) -> Result<RoutedAnswer, CallError> {
        let mut session = self.open_session(CallBudget::new(self.max_calls));
        info!(strategy = %strategy, "Running requested strategy");
        let answer = self.dispatch(&mut session, strategy, question).await?;
        Ok(RoutedAnswer {
            category: None,
            strategy,
            answer,
            calls: session.calls_made(),
        })
    }

    /// Run `strategy` inside an existing session
    pub async fn dispatch(
        &self,
        session: &mut CallSession<'_>,
        strategy: StrategyKind,
        question: &str,
    ) -> Result<String, CallError> {
        let answer = build_strategy(strategy, &self.params)
            .solve(session, question)
            .await?;

        if strategy == StrategyKind::Math && self.params.verify_math {
            return Ok(self.verify_math(session, question, answer).await);
        }
        Ok(answer)
    }

    /// Re-check a math answer by voting over "verify this solution" samples
    ///
    /// Failures keep the original answer.
    async fn verify_math(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
        answer: String,
    ) -> String {
        session.set_stage("math-verify");
        let verifier = SelfConsistency::final_answer(
            self.params.verify_samples,
            self.params.sample_temperature,
        );
        let prompt = PromptTemplate::math_verify(question, &answer);

        match verifier.vote(session, &prompt).await {
            Ok(outcome) if outcome.answer != answer && !outcome.answer.is_empty() => {
                info!(
                    original = %answer,
                    verified = %outcome.answer,
                    "Verification replaced math answer"
                );
                outcome.answer
            }
            Ok(_) => answer,
            Err(e) => {
                warn!("Math verification failed, keeping answer: {}", e);
                answer
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_client::CompletionError;
    use crate::session::testing::{EchoClient, ScriptedClient};

    fn router(client: ScriptedClient, params: StrategyParams) -> RouteQuestionUseCase<ScriptedClient> {
        RouteQuestionUseCase::new(Arc::new(client), params)
    }

    #[tokio::test]
    async fn test_unrecognized_label_routes_to_chain_of_thought() {
        let use_case = router(
            ScriptedClient::new(["geography", "Think...\nFinal Answer: Paris"]),
            StrategyParams::default(),
        );

        let routed = use_case.execute("Capital of France?").await.unwrap();

        assert_eq!(routed.category, Some(Category::Unrecognized("geography".into())));
        assert_eq!(routed.strategy, StrategyKind::ChainOfThought);
        assert_eq!(routed.answer, "Paris");
        assert_eq!(routed.calls, 2);
    }

    #[tokio::test]
    async fn test_planning_routes_to_plan_generation() {
        let use_case = router(
            ScriptedClient::new(["planning", "(pick-up a)\nnotes\n(stack a b)"]),
            StrategyParams::default(),
        );
        let routed = use_case.execute("stack a on b").await.unwrap();
        assert_eq!(routed.strategy, StrategyKind::PlanGeneration);
        assert_eq!(routed.answer, "(pick-up a)\n(stack a b)");
    }

    #[tokio::test]
    async fn test_math_without_verification() {
        let use_case = router(
            ScriptedClient::new(["math", "Step 1: 6*7\nFinal Answer: 42", "42"]),
            StrategyParams::default().with_verify_math(false),
        );
        let routed = use_case.execute("6*7?").await.unwrap();
        assert_eq!(routed.strategy, StrategyKind::Math);
        assert_eq!(routed.answer, "42");
        assert_eq!(routed.calls, 3);
    }

    #[tokio::test]
    async fn test_math_verification_replaces_differing_answer() {
        let use_case = router(
            ScriptedClient::new([
                "math",
                "Final Answer: 41",
                "41",
                "Wrong. Final Answer: 42",
                "Final Answer: 42",
                "Final Answer: 41",
            ]),
            StrategyParams::default(),
        );
        let routed = use_case.execute("6*7?").await.unwrap();
        assert_eq!(routed.answer, "42");
        assert_eq!(routed.calls, 6);
    }

    #[tokio::test]
    async fn test_math_verification_failure_keeps_answer() {
        let use_case = router(
            ScriptedClient::with_results([
                Ok("math".to_string()),
                Ok("Final Answer: 9".to_string()),
                Ok("9".to_string()),
                Err(CompletionError::Timeout),
                Err(CompletionError::Timeout),
                Err(CompletionError::Timeout),
            ]),
            StrategyParams::default(),
        );
        let routed = use_case.execute("3*3?").await.unwrap();
        assert_eq!(routed.answer, "9");
    }

    #[tokio::test]
    async fn test_execute_with_skips_classification() {
        let use_case = router(
            ScriptedClient::new(["draft", "fine as is", "draft"]),
            StrategyParams::default(),
        );
        let routed = use_case
            .execute_with("q", StrategyKind::SelfRefinement)
            .await
            .unwrap();
        assert_eq!(routed.category, None);
        assert_eq!(routed.answer, "draft");
        assert_eq!(routed.calls, 3);
    }

    #[tokio::test]
    async fn test_route_reports_choice_before_dispatch() {
        let client = ScriptedClient::new(["coding", "def f(): return 1", "VALID"]);
        let use_case = router(client, StrategyParams::default());
        let mut session = use_case.open_session(CallBudget::new(20));
        let mut seen = None;

        let routed = use_case
            .route(&mut session, "write f", |category, strategy| {
                seen = Some((category.clone(), strategy));
            })
            .await
            .unwrap();

        assert_eq!(seen, Some((Category::Coding, StrategyKind::CodeRefinement)));
        assert_eq!(routed.answer, "def f(): return 1");
        assert_eq!(routed.calls, 3);
    }

    #[tokio::test]
    async fn test_failed_classification_propagates() {
        let use_case = router(
            ScriptedClient::with_results([Err(CompletionError::Http {
                status: 401,
                detail: "unauthorized".into(),
            })]),
            StrategyParams::default(),
        );
        let err = use_case.execute("q").await.unwrap_err();
        assert_eq!(err.to_string(), "ERROR status=401 unauthorized");
    }

    #[tokio::test]
    async fn test_every_strategy_fits_default_budget() {
        // a reply without markers drives each strategy down its longest path
        let use_case = RouteQuestionUseCase::new(Arc::new(EchoClient("no marker")), StrategyParams::default());
        for kind in StrategyKind::ALL {
            let routed = use_case.execute_with("q", kind).await.unwrap();
            assert!(routed.calls <= DEFAULT_MAX_CALLS, "{kind} used {}", routed.calls);
        }
    }
}
