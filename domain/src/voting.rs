//! Majority voting over sampled answers.
//!
//! Candidates are compared as exact strings. The tally remembers the order
//! in which distinct candidates were first seen, and ties are broken in
//! favour of the earliest one, so the same samples always elect the same
//! winner.

use serde::{Deserialize, Serialize};

/// Occurrence counts of candidate answers, in first-seen order
///
/// # Example
///
/// ```
/// use strata_domain::voting::VoteTally;
///
/// let tally = VoteTally::from_candidates(["4", "4", "5", "4"]);
/// let outcome = tally.outcome().unwrap();
/// assert_eq!(outcome.answer, "4");
/// assert_eq!(outcome.votes, 3);
/// assert_eq!(outcome.confidence, 0.75);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    entries: Vec<(String, usize)>,
    samples: usize,
}

/// The elected candidate with its support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteOutcome {
    /// Winning candidate
    pub answer: String,
    /// Number of samples that produced it
    pub votes: usize,
    /// Total samples in the tally
    pub samples: usize,
    /// `votes / samples`
    pub confidence: f64,
}

impl VoteOutcome {
    pub fn is_unanimous(&self) -> bool {
        self.votes == self.samples
    }
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from candidates in sampling order
    pub fn from_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tally = Self::new();
        for candidate in candidates {
            tally.record(candidate);
        }
        tally
    }

    /// Record one sampled candidate
    pub fn record(&mut self, candidate: impl Into<String>) {
        let candidate = candidate.into();
        self.samples += 1;
        match self.entries.iter_mut().find(|(c, _)| *c == candidate) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((candidate, 1)),
        }
    }

    /// Count for a specific candidate
    pub fn count(&self, candidate: &str) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| c == candidate)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Number of samples recorded
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of distinct candidates
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Elect the most frequent candidate; earliest first-seen wins ties
    pub fn outcome(&self) -> Option<VoteOutcome> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.entries {
            if best.is_none_or(|(_, n)| entry.1 > *n) {
                best = Some(entry);
            }
        }
        best.map(|(answer, votes)| VoteOutcome {
            answer: answer.clone(),
            votes: *votes,
            samples: self.samples,
            confidence: *votes as f64 / self.samples as f64,
        })
    }

    /// Candidates with counts, in first-seen order
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanimous_vote() {
        let tally = VoteTally::from_candidates(["Paris"; 4]);
        let outcome = tally.outcome().unwrap();
        assert_eq!(outcome.answer, "Paris");
        assert_eq!(outcome.votes, 4);
        assert_eq!(outcome.confidence, 1.0);
        assert!(outcome.is_unanimous());
    }

    #[test]
    fn test_three_one_split() {
        let tally = VoteTally::from_candidates(["12", "13", "12", "12"]);
        let outcome = tally.outcome().unwrap();
        assert_eq!(outcome.answer, "12");
        assert_eq!(outcome.votes, 3);
        assert_eq!(outcome.samples, 4);
        assert!(!outcome.is_unanimous());
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let tally = VoteTally::from_candidates(["b", "a", "a", "b"]);
        assert_eq!(tally.outcome().unwrap().answer, "b");

        let tally = VoteTally::from_candidates(["x", "y", "z"]);
        assert_eq!(tally.outcome().unwrap().answer, "x");
    }

    #[test]
    fn test_exact_string_comparison() {
        let tally = VoteTally::from_candidates(["42", "42.0", " 42"]);
        assert_eq!(tally.distinct(), 3);
        assert_eq!(tally.count("42"), 1);
    }

    #[test]
    fn test_empty_tally_has_no_outcome() {
        let tally = VoteTally::new();
        assert!(tally.is_empty());
        assert!(tally.outcome().is_none());
    }

    #[test]
    fn test_entries_in_first_seen_order() {
        let tally = VoteTally::from_candidates(["c", "a", "c"]);
        let entries: Vec<_> = tally.entries().collect();
        assert_eq!(entries, vec![("c", 2), ("a", 1)]);
    }
}
