//! Answer, critique, refine.

use super::Strategy;
use crate::session::{CallError, CallSession};
use async_trait::async_trait;
use strata_domain::StrategyKind;
use strata_domain::prompt::PromptTemplate;
use tracing::{debug, warn};

/// Iteratively improve an initial answer through critique rounds
pub struct SelfRefinement {
    iterations: usize,
}

impl SelfRefinement {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }
}

#[async_trait]
impl Strategy for SelfRefinement {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SelfRefinement
    }

    async fn solve(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
    ) -> Result<String, CallError> {
        session.set_stage("self-refinement");
        let mut answer = session
            .invoke(&PromptTemplate::initial_answer(question), 0.0, None)
            .await?;

        for round in 1..=self.iterations {
            let critique = match session
                .invoke(&PromptTemplate::critique(question, &answer), 0.0, None)
                .await
            {
                Ok(critique) => critique,
                Err(e) => {
                    warn!(round, "Critique failed, keeping current answer: {}", e);
                    break;
                }
            };

            let refined = match session
                .invoke(&PromptTemplate::refine(question, &answer, &critique), 0.0, None)
                .await
            {
                Ok(refined) => refined,
                Err(e) => {
                    warn!(round, "Refinement failed, keeping current answer: {}", e);
                    break;
                }
            };

            if refined.is_empty() {
                warn!(round, "Empty refinement, keeping current answer");
                continue;
            }
            if refined == answer {
                debug!(round, "Answer unchanged, stopping refinement");
                break;
            }
            answer = refined;
        }

        Ok(answer)
    }
}
