//! Prompting strategies.
//!
//! Each strategy is a fixed pipeline of prompts run through a
//! [`CallSession`]. The router picks one per question via
//! [`StrategyKind::for_category`](strata_domain::StrategyKind::for_category)
//! and builds it with [`build_strategy`].
//!
//! The first mandatory call of every strategy propagates its [`CallError`];
//! later optional stages log a warning and keep the best answer so far.

pub mod chain_of_thought;
pub mod code_refine;
pub mod math;
pub mod plan;
pub mod self_consistency;
pub mod self_refine;
pub mod think_act_observe;

pub use chain_of_thought::ChainOfThought;
pub use code_refine::CodeRefinement;
pub use math::MathSolver;
pub use plan::PlanGeneration;
pub use self_consistency::{CandidateExtractor, SelfConsistency};
pub use self_refine::SelfRefinement;
pub use think_act_observe::ThinkActObserve;

use crate::config::StrategyParams;
use crate::session::{CallError, CallSession};
use async_trait::async_trait;
use strata_domain::StrategyKind;

/// One reasoning approach
#[async_trait]
pub trait Strategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Answer `question`, spending calls from `session`
    async fn solve(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
    ) -> Result<String, CallError>;
}

/// Instantiate the strategy for `kind` with the configured knobs
pub fn build_strategy(kind: StrategyKind, params: &StrategyParams) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::ChainOfThought => Box::new(ChainOfThought),
        StrategyKind::SelfRefinement => Box::new(SelfRefinement::new(params.refine_iterations)),
        StrategyKind::SelfConsistency => Box::new(SelfConsistency::final_answer(
            params.vote_samples,
            params.sample_temperature,
        )),
        StrategyKind::FutureConsistency => Box::new(SelfConsistency::boxed(
            params.future_samples,
            params.sample_temperature,
        )),
        StrategyKind::ThinkActObserve => Box::new(ThinkActObserve),
        StrategyKind::PlanGeneration => Box::new(PlanGeneration::new(params.max_plan_steps)),
        StrategyKind::Math => Box::new(MathSolver::new(params.math_continuations)),
        StrategyKind::CodeRefinement => {
            Box::new(CodeRefinement::new(params.code_review_iterations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_strategy_matches_kind() {
        let params = StrategyParams::default();
        for kind in StrategyKind::ALL {
            assert_eq!(build_strategy(kind, &params).kind(), kind);
        }
    }
}
