//! Application-level configuration.
//!
//! - [`StrategyParams`]: sampling counts and loop bounds for each strategy
//! - [`BatchParams`]: index range, checkpoint cadence, call budget

pub mod batch_params;
pub mod strategy_params;

pub use batch_params::BatchParams;
pub use strategy_params::StrategyParams;
