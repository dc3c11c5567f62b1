//! Per-question call budget.
//!
//! A [`CallBudget`] lives for exactly one question. Every remote call made
//! while answering that question must first [`try_consume`](CallBudget::try_consume)
//! a slot; once the ceiling is reached every further attempt fails with
//! [`BudgetExhausted`] and no request leaves the process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default ceiling on remote calls per question
pub const DEFAULT_MAX_CALLS: usize = 20;

/// Returned once the ceiling has been reached
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ERROR: max call limit reached")]
pub struct BudgetExhausted;

/// Call counter with a fixed ceiling (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallBudget {
    used: usize,
    ceiling: usize,
}

impl CallBudget {
    /// Create an unused budget with the given ceiling
    pub fn new(ceiling: usize) -> Self {
        Self { used: 0, ceiling }
    }

    /// Reserve one call, returning its 1-based ordinal
    pub fn try_consume(&mut self) -> Result<usize, BudgetExhausted> {
        if self.used >= self.ceiling {
            return Err(BudgetExhausted);
        }
        self.used += 1;
        Ok(self.used)
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    pub fn remaining(&self) -> usize {
        self.ceiling.saturating_sub(self.used)
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.ceiling
    }
}

impl Default for CallBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CALLS)
    }
}
