//! Code generation with reviewer/patcher rounds.

use super::Strategy;
use crate::session::{CallError, CallSession};
use async_trait::async_trait;
use strata_domain::parsing::parse_review_verdict;
use strata_domain::prompt::PromptTemplate;
use strata_domain::{ReviewVerdict, StrategyKind};
use tracing::{debug, warn};

/// Temperature for the initial code draft
const GENERATION_TEMPERATURE: f64 = 0.25;

pub struct CodeRefinement {
    iterations: usize,
}

impl CodeRefinement {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }
}

#[async_trait]
impl Strategy for CodeRefinement {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CodeRefinement
    }

    async fn solve(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
    ) -> Result<String, CallError> {
        session.set_stage("code-refinement");
        let mut code = session
            .invoke(
                &PromptTemplate::code_generate(question),
                GENERATION_TEMPERATURE,
                None,
            )
            .await?;

        for round in 1..=self.iterations {
            let review = match session
                .invoke(&PromptTemplate::code_review(question, &code), 0.0, None)
                .await
            {
                Ok(review) => review,
                Err(e) => {
                    warn!(round, "Code review failed, keeping current code: {}", e);
                    break;
                }
            };

            let instruction = match parse_review_verdict(&review) {
                ReviewVerdict::Valid => {
                    debug!(round, "Code accepted by reviewer");
                    break;
                }
                ReviewVerdict::Fix(instruction) => instruction,
            };

            match session
                .invoke(
                    &PromptTemplate::code_patch(question, &code, &instruction),
                    0.0,
                    None,
                )
                .await
            {
                Ok(patched) if !patched.is_empty() => code = patched,
                Ok(_) => {
                    warn!(round, "Empty patch received, aborting refinement");
                    break;
                }
                Err(e) => {
                    warn!(round, "Patch failed, keeping current code: {}", e);
                    break;
                }
            }
        }

        Ok(code)
    }
}
