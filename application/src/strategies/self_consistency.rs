//! Self-consistency voting.
//!
//! Samples several independent answers at a raised temperature, extracts a
//! short candidate from each, and elects the majority. Used directly for
//! `Final Answer:` voting, for `\boxed{` forecasting, and by the math
//! verification pass.

use super::Strategy;
use crate::session::{CallError, CallSession};
use async_trait::async_trait;
use strata_domain::parsing::{extract_boxed, final_answer_line};
use strata_domain::prompt::PromptTemplate;
use strata_domain::{StrategyKind, VoteOutcome, VoteTally};
use tracing::{info, warn};

/// How a candidate is pulled out of one sampled reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateExtractor {
    /// First line after `Final Answer:`; one extraction call when absent
    FinalAnswer,
    /// Rest of the `\boxed{` line; the trimmed reply when absent
    Boxed,
}

/// Majority vote over sampled candidates
pub struct SelfConsistency {
    samples: usize,
    temperature: f64,
    extractor: CandidateExtractor,
}

impl SelfConsistency {
    pub fn new(samples: usize, temperature: f64, extractor: CandidateExtractor) -> Self {
        Self {
            samples,
            temperature,
            extractor,
        }
    }

    pub fn final_answer(samples: usize, temperature: f64) -> Self {
        Self::new(samples, temperature, CandidateExtractor::FinalAnswer)
    }

    pub fn boxed(samples: usize, temperature: f64) -> Self {
        Self::new(samples, temperature, CandidateExtractor::Boxed)
    }

    fn sample_prompt(&self, question: &str) -> String {
        match self.extractor {
            CandidateExtractor::FinalAnswer => PromptTemplate::consistency_sample(question),
            CandidateExtractor::Boxed => PromptTemplate::future_sample(question),
        }
    }

    /// Sample `prompt` repeatedly and elect the most frequent candidate
    ///
    /// Failed samples are skipped. Returns the last error only when no
    /// sample succeeded.
    pub async fn vote(
        &self,
        session: &mut CallSession<'_>,
        prompt: &str,
    ) -> Result<VoteOutcome, CallError> {
        let mut tally = VoteTally::new();
        let mut last_error = None;

        for sample in 0..self.samples {
            let reply = match session.invoke(prompt, self.temperature, None).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(sample, "Vote sample failed: {}", e);
                    let exhausted = e.is_budget_exhausted();
                    last_error = Some(e);
                    if exhausted {
                        break;
                    }
                    continue;
                }
            };
            let candidate = self.extract(session, &reply).await;
            tally.record(candidate);
        }

        match tally.outcome() {
            Some(outcome) => {
                info!(
                    answer = %outcome.answer,
                    votes = outcome.votes,
                    samples = outcome.samples,
                    "Vote confidence {:.2}",
                    outcome.confidence
                );
                Ok(outcome)
            }
            None => Err(last_error.unwrap_or(CallError::BudgetExhausted)),
        }
    }

    async fn extract(&self, session: &mut CallSession<'_>, reply: &str) -> String {
        match self.extractor {
            CandidateExtractor::Boxed => extract_boxed(reply),
            CandidateExtractor::FinalAnswer => {
                if let Some(line) = final_answer_line(reply) {
                    return line;
                }
                match session
                    .invoke(
                        &PromptTemplate::extract_answer(reply),
                        0.0,
                        Some(PromptTemplate::answer_only_system()),
                    )
                    .await
                {
                    Ok(extracted) => extracted,
                    Err(e) => {
                        warn!("Answer extraction failed, voting on raw reply: {}", e);
                        reply.trim().to_string()
                    }
                }
            }
        }
    }
}

#[async_trait]
impl Strategy for SelfConsistency {
    fn kind(&self) -> StrategyKind {
        match self.extractor {
            CandidateExtractor::FinalAnswer => StrategyKind::SelfConsistency,
            CandidateExtractor::Boxed => StrategyKind::FutureConsistency,
        }
    }

    async fn solve(
        &self,
        session: &mut CallSession<'_>,
        question: &str,
    ) -> Result<String, CallError> {
        session.set_stage(self.kind().as_str());
        let prompt = self.sample_prompt(question);
        let outcome = self.vote(session, &prompt).await?;
        Ok(outcome.answer)
    }
}
