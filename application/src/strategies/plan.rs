//! Parenthesised action plans.

use super::Strategy;
use crate::session::{CallError, CallSession};
use async_trait::async_trait;
use strata_domain::StrategyKind;
use strata_domain::parsing::filter_plan_lines;
use strata_domain::prompt::PromptTemplate;

/// Ask for a plan and keep only the `(action ...)` lines
pub struct PlanGeneration {
    max_steps: usize,
}

impl PlanGeneration {
    pub fn new(max_steps: usize) -> Self {
        Self { max_steps }
    }
}

#[async_trait]
impl Strategy for PlanGeneration {
    fn kind(&self) -> StrategyKind {
        StrategyKind::PlanGeneration
    }

    async fn solve(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
    ) -> Result<String, CallError> {
        session.set_stage("plan");
        let reply = session
            .invoke(
                &PromptTemplate::plan(question, self.max_steps),
                0.0,
                Some(PromptTemplate::plan_system()),
            )
            .await?;
        Ok(filter_plan_lines(&reply))
    }
}
