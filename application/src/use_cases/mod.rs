//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod classify;
pub mod evaluate;
pub mod route_question;
pub mod run_batch;
