//! Prompt domain
//!
//! Templates for the classifier and every answering strategy.

mod template;

pub use template::PromptTemplate;
