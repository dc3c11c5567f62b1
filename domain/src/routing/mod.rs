//! Question categories and the category → strategy dispatch table.

pub mod category;
pub mod strategy;

pub use category::Category;
pub use strategy::StrategyKind;
