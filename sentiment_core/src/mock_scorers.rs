//! Deterministic scorers with hand-picked scores
//!
//! These stand in for the lexicon backend wherever an exact score is
//! needed, such as pipeline tests and demos.

use crate::{PolarityScore, PolarityScorer, Result, SentimentError};
use std::collections::{HashMap, HashSet};

/// Looks up fragments in a fixed table; unknown text scores 0.0
#[derive(Debug, Clone, Default)]
pub struct TableScorer {
    scores: HashMap<String, f64>,
    failures: HashSet<String>,
}

impl TableScorer {
    /// Create a scorer from `(text, score)` pairs
    ///
    /// Lookups use the trimmed fragment text.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            scores: entries
                .into_iter()
                .map(|(text, score)| (text.into(), score))
                .collect(),
            failures: HashSet::new(),
        }
    }

    /// Make scoring fail for the given fragments
    pub fn with_failures<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failures.extend(texts.into_iter().map(Into::into));
        self
    }
}

impl PolarityScorer for TableScorer {
    fn score(&self, text: &str) -> Result<PolarityScore> {
        let key = text.trim();
        if self.failures.contains(key) {
            return Err(SentimentError::ScoringFailed(format!(
                "no score for {:?}",
                key
            )));
        }
        PolarityScore::new(self.scores.get(key).copied().unwrap_or(0.0))
    }

    fn name(&self) -> &str {
        "table"
    }
}

/// Fails on every fragment
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingScorer;

impl PolarityScorer for FailingScorer {
    fn score(&self, text: &str) -> Result<PolarityScore> {
        Err(SentimentError::ScoringFailed(format!(
            "refusing to score {:?}",
            text
        )))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup_trims() {
        let scorer = TableScorer::new([("up", 0.4), ("down", -0.4)]);
        assert_eq!(scorer.score("  up ").unwrap().value(), 0.4);
        assert_eq!(scorer.score("down").unwrap().value(), -0.4);
        assert_eq!(scorer.score("sideways").unwrap(), PolarityScore::NEUTRAL);
    }

    #[test]
    fn test_table_failures() {
        let scorer = TableScorer::new([("up", 0.4)]).with_failures(["broken"]);
        assert!(scorer.score("broken").is_err());
        assert!(scorer.score("up").is_ok());
    }
}
