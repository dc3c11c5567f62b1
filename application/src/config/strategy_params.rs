//! Strategy parameters: sampling counts and loop bounds.
//!
//! [`StrategyParams`] groups the static knobs that shape each strategy
//! pipeline. The router builds its strategies from one instance.

use serde::{Deserialize, Serialize};
use strata_domain::StrategyKind;

/// Strategy loop control parameters.
///
/// | Field | Strategy |
/// |-------|----------|
/// | `vote_samples` | self-consistency |
/// | `future_samples` | future-event voting |
/// | `verify_samples`, `verify_math` | math verification pass |
/// | `refine_iterations` | self-refinement |
/// | `code_review_iterations` | code refinement |
/// | `math_continuations` | math solving |
/// | `max_plan_steps` | plan generation |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyParams {
    /// Candidates sampled by self-consistency voting.
    pub vote_samples: usize,
    /// Candidates sampled by future-event voting.
    pub future_samples: usize,
    /// Candidates sampled when verifying a math answer.
    pub verify_samples: usize,
    /// Temperature for voting samples.
    pub sample_temperature: f64,
    /// Critique/refine rounds for self-refinement.
    pub refine_iterations: usize,
    /// Review/patch rounds for code refinement.
    pub code_review_iterations: usize,
    /// Continuation calls when a math solution lacks a final answer.
    pub math_continuations: usize,
    /// Maximum actions requested from the planner.
    pub max_plan_steps: usize,
    /// Run a self-consistency verification pass after math solving.
    pub verify_math: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            vote_samples: 4,
            future_samples: 4,
            verify_samples: 3,
            sample_temperature: 0.8,
            refine_iterations: 2,
            code_review_iterations: 2,
            math_continuations: 2,
            max_plan_steps: 30,
            verify_math: true,
        }
    }
}

impl StrategyParams {
    // ==================== Builder Methods ====================

    pub fn with_vote_samples(mut self, samples: usize) -> Self {
        self.vote_samples = samples;
        self
    }

    pub fn with_future_samples(mut self, samples: usize) -> Self {
        self.future_samples = samples;
        self
    }

    pub fn with_verify_math(mut self, enabled: bool) -> Self {
        self.verify_math = enabled;
        self
    }

    pub fn with_refine_iterations(mut self, iterations: usize) -> Self {
        self.refine_iterations = iterations;
        self
    }

    pub fn with_max_plan_steps(mut self, steps: usize) -> Self {
        self.max_plan_steps = steps;
        self
    }

    // ==================== Budget Estimates ====================

    /// Upper bound on remote calls a strategy can issue, excluding classification
    pub fn worst_case_calls(&self, kind: StrategyKind) -> usize {
        match kind {
            StrategyKind::ChainOfThought | StrategyKind::PlanGeneration => 1,
            StrategyKind::SelfRefinement => 1 + 2 * self.refine_iterations,
            StrategyKind::CodeRefinement => 1 + 2 * self.code_review_iterations,
            StrategyKind::SelfConsistency => 2 * self.vote_samples,
            StrategyKind::FutureConsistency => self.future_samples,
            StrategyKind::ThinkActObserve => 4,
            StrategyKind::Math => {
                let solve = 1 + self.math_continuations + 2;
                let verify = if self.verify_math {
                    2 * self.verify_samples
                } else {
                    0
                };
                solve + verify
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = StrategyParams::default();
        assert_eq!(params.vote_samples, 4);
        assert_eq!(params.future_samples, 4);
        assert_eq!(params.refine_iterations, 2);
        assert!(params.verify_math);
    }

    #[test]
    fn test_builder() {
        let params = StrategyParams::default()
            .with_vote_samples(5)
            .with_verify_math(false)
            .with_max_plan_steps(10);
        assert_eq!(params.vote_samples, 5);
        assert!(!params.verify_math);
        assert_eq!(params.max_plan_steps, 10);
    }

    #[test]
    fn test_default_strategies_fit_default_budget() {
        let params = StrategyParams::default();
        for kind in StrategyKind::ALL {
            // one call is reserved for classification
            assert!(
                1 + params.worst_case_calls(kind) <= strata_domain::DEFAULT_MAX_CALLS,
                "{} exceeds the default budget",
                kind
            );
        }
    }

    #[test]
    fn test_math_worst_case_includes_verification() {
        let params = StrategyParams::default();
        assert_eq!(params.worst_case_calls(StrategyKind::Math), 5 + 6);
        let params = params.with_verify_math(false);
        assert_eq!(params.worst_case_calls(StrategyKind::Math), 5);
    }
}
