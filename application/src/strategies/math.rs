//! Step-structured math solving.
//!
//! 1. Solve with numbered steps ending in `Final Answer:`
//! 2. Continue the work while the marker is missing
//! 3. Force a one-line answer if it is still missing
//! 4. Strip the answer down to a bare value

use super::Strategy;
use crate::session::{CallError, CallSession};
use async_trait::async_trait;
use strata_domain::StrategyKind;
use strata_domain::parsing::{extract_final_answer, has_final_answer};
use strata_domain::prompt::PromptTemplate;
use tracing::{debug, warn};

pub struct MathSolver {
    continuations: usize,
}

impl MathSolver {
    pub fn new(continuations: usize) -> Self {
        Self { continuations }
    }
}

#[async_trait]
impl Strategy for MathSolver {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Math
    }

    async fn solve(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
    ) -> Result<String, CallError> {
        session.set_stage("math");
        let system = Some(PromptTemplate::math_system());
        let mut work = session
            .invoke(&PromptTemplate::math_solve(question), 0.0, system)
            .await?;

        for round in 1..=self.continuations {
            if has_final_answer(&work) {
                break;
            }
            debug!(round, "No final answer yet, continuing");
            match session
                .invoke(&PromptTemplate::math_continue(question, &work), 0.0, system)
                .await
            {
                Ok(more) => {
                    work.push('\n');
                    work.push_str(&more);
                }
                Err(e) => {
                    warn!(round, "Continuation failed: {}", e);
                    break;
                }
            }
        }

        if !has_final_answer(&work) {
            match session
                .invoke(&PromptTemplate::math_force_answer(question, &work), 0.0, system)
                .await
            {
                Ok(forced) => {
                    work.push('\n');
                    work.push_str(&forced);
                }
                Err(e) => warn!("Forced answer extraction failed: {}", e),
            }
        }

        let answer = extract_final_answer(&work);
        match session
            .invoke(
                &PromptTemplate::math_number(question, &answer),
                0.0,
                Some(PromptTemplate::answer_only_system()),
            )
            .await
        {
            Ok(bare) if !bare.is_empty() => Ok(bare),
            Ok(_) => Ok(answer),
            Err(e) => {
                warn!("Number extraction failed, keeping full answer: {}", e);
                Ok(answer)
            }
        }
    }
}
