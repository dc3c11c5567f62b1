//! Single-call chain-of-thought.

use super::Strategy;
use crate::session::{CallError, CallSession};
use async_trait::async_trait;
use strata_domain::StrategyKind;
use strata_domain::parsing::extract_final_answer;
use strata_domain::prompt::PromptTemplate;

/// Reason step by step, answer after `Final Answer:`
pub struct ChainOfThought;

#[async_trait]
impl Strategy for ChainOfThought {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ChainOfThought
    }

    async fn solve(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
    ) -> Result<String, CallError> {
        session.set_stage("chain-of-thought");
        let reply = session
            .invoke(&PromptTemplate::chain_of_thought(question), 0.0, None)
            .await?;
        Ok(extract_final_answer(&reply))
    }
}
