//! Batch progress reporting

pub mod reporter;
