//! Strategy configuration from TOML (`[strategies]` section)

use serde::{Deserialize, Serialize};
use strata_application::StrategyParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStrategiesConfig {
    pub vote_samples: usize,
    pub future_samples: usize,
    pub verify_samples: usize,
    pub sample_temperature: f64,
    pub refine_iterations: usize,
    pub code_review_iterations: usize,
    pub math_continuations: usize,
    pub max_plan_steps: usize,
    /// Cross-check math answers with a verification vote.
    pub verify_math: bool,
}

impl Default for FileStrategiesConfig {
    fn default() -> Self {
        let params = StrategyParams::default();
        Self {
            vote_samples: params.vote_samples,
            future_samples: params.future_samples,
            verify_samples: params.verify_samples,
            sample_temperature: params.sample_temperature,
            refine_iterations: params.refine_iterations,
            code_review_iterations: params.code_review_iterations,
            math_continuations: params.math_continuations,
            max_plan_steps: params.max_plan_steps,
            verify_math: params.verify_math,
        }
    }
}

impl FileStrategiesConfig {
    pub fn to_params(&self) -> StrategyParams {
        StrategyParams {
            vote_samples: self.vote_samples,
            future_samples: self.future_samples,
            verify_samples: self.verify_samples,
            sample_temperature: self.sample_temperature,
            refine_iterations: self.refine_iterations,
            code_review_iterations: self.code_review_iterations,
            math_continuations: self.math_continuations,
            max_plan_steps: self.max_plan_steps,
            verify_math: self.verify_math,
        }
    }
}
