//! HTTP adapters for the completion client port.

mod openai;

pub use openai::{OpenAiCompatibleClient, OpenAiSettings};
