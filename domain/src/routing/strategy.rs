//! Strategy identifiers and the dispatch table

use super::category::Category;
use serde::{Deserialize, Serialize};

/// The prompting strategies the router can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Single call ending in a `Final Answer:` marker
    ChainOfThought,
    /// Answer, then critique/refine rounds
    SelfRefinement,
    /// Majority vote over sampled `Final Answer:` candidates
    SelfConsistency,
    /// Majority vote over sampled `\boxed{` candidates
    FutureConsistency,
    /// Thought → action → observation → answer
    ThinkActObserve,
    /// Parenthesised action plan
    PlanGeneration,
    /// Step-structured math solving with answer extraction
    Math,
    /// Code generation with reviewer/patcher rounds
    CodeRefinement,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 8] = [
        StrategyKind::ChainOfThought,
        StrategyKind::SelfRefinement,
        StrategyKind::SelfConsistency,
        StrategyKind::FutureConsistency,
        StrategyKind::ThinkActObserve,
        StrategyKind::PlanGeneration,
        StrategyKind::Math,
        StrategyKind::CodeRefinement,
    ];

    /// Dispatch table: which strategy answers a category
    pub fn for_category(category: &Category) -> Self {
        match category {
            Category::Math => StrategyKind::Math,
            Category::Commonsense => StrategyKind::ThinkActObserve,
            Category::FuturePrediction => StrategyKind::FutureConsistency,
            Category::Planning => StrategyKind::PlanGeneration,
            Category::Coding => StrategyKind::CodeRefinement,
            Category::Unrecognized(_) => StrategyKind::ChainOfThought,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::ChainOfThought => "chain-of-thought",
            StrategyKind::SelfRefinement => "self-refinement",
            StrategyKind::SelfConsistency => "self-consistency",
            StrategyKind::FutureConsistency => "future-consistency",
            StrategyKind::ThinkActObserve => "think-act-observe",
            StrategyKind::PlanGeneration => "plan-generation",
            StrategyKind::Math => "math",
            StrategyKind::CodeRefinement => "code-refinement",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown strategy '{}' (expected one of: {})",
                    s,
                    StrategyKind::ALL.map(|k| k.as_str()).join(", ")
                )
            })
    }
}
