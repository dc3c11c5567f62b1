//! Thought, action, observation, answer.

use super::Strategy;
use crate::session::{CallError, CallSession};
use async_trait::async_trait;
use strata_domain::StrategyKind;
use strata_domain::prompt::PromptTemplate;

/// Four chained calls; each stage's full text feeds the next prompt
pub struct ThinkActObserve;

#[async_trait]
impl Strategy for ThinkActObserve {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ThinkActObserve
    }

    async fn solve(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
    ) -> Result<String, CallError> {
        session.set_stage("think-act-observe");
        let thought = session
            .invoke(&PromptTemplate::thought(question), 0.0, None)
            .await?;
        let action = session
            .invoke(&PromptTemplate::action(question, &thought), 0.0, None)
            .await?;
        let observation = session
            .invoke(
                &PromptTemplate::observation(question, &thought, &action),
                0.0,
                None,
            )
            .await?;
        session
            .invoke(
                &PromptTemplate::react_answer(question, &thought, &action, &observation),
                0.0,
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::ScriptedClient;
    use strata_domain::CallBudget;

    #[tokio::test]
    async fn test_each_stage_feeds_the_next() {
        let client = ScriptedClient::new([
            "THOUGHT-TEXT",
            "ACTION-TEXT",
            "OBSERVATION-TEXT",
            "  It melts. ",
        ]);
        let mut session = CallSession::new(&client, CallBudget::default());

        let answer = ThinkActObserve
            .solve(&mut session, "What happens to ice in the sun?")
            .await
            .unwrap();

        assert_eq!(answer, "It melts.");
        assert_eq!(client.call_count(), 4);
        assert!(client.prompt(1).contains("THOUGHT-TEXT"));
        assert!(client.prompt(2).contains("ACTION-TEXT"));
        let last = client.prompt(3);
        assert!(last.contains("THOUGHT-TEXT"));
        assert!(last.contains("ACTION-TEXT"));
        assert!(last.contains("OBSERVATION-TEXT"));
    }

    #[tokio::test]
    async fn test_budget_exhaustion_mid_pipeline() {
        let client = ScriptedClient::new(["t", "a", "o", "answer"]);
        let mut session = CallSession::new(&client, CallBudget::new(2));
        let err = ThinkActObserve.solve(&mut session, "q").await.unwrap_err();
        assert_eq!(err, CallError::BudgetExhausted);
    }
}
