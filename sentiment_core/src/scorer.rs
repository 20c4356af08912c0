//! Polarity scorer capability and the VADER backend

use crate::{PolarityScore, Result, SentimentError};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Anything that turns a text fragment into a polarity score
///
/// Implementations must be deterministic: the same text always yields the
/// same score. They hold no per-call state, so one instance can be shared
/// read-only for the lifetime of the process.
pub trait PolarityScorer: Send + Sync {
    /// Score a fragment of text
    fn score(&self, text: &str) -> Result<PolarityScore>;

    /// Short name of the backend, used in logs
    fn name(&self) -> &str;
}

/// Score a fragment, falling back to [`PolarityScore::NEUTRAL`] on failure
///
/// One bad fragment never aborts the surrounding request.
pub fn score_or_neutral(scorer: &dyn PolarityScorer, text: &str) -> PolarityScore {
    match scorer.score(text) {
        Ok(score) => score,
        Err(e) => {
            warn!(scorer = scorer.name(), error = %e, "scoring failed, treating fragment as neutral");
            PolarityScore::NEUTRAL
        }
    }
}

/// Scorer backed by the VADER lexicon, returning its compound score
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Load the lexicon and build the analyzer
    ///
    /// Call once at startup and share the instance.
    pub fn new() -> Self {
        debug!("initializing VADER scorer");
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

/// Run one engine call, turning a panic into [`SentimentError::ScoringFailed`]
///
/// Only the unwind is caught. The process panic hook still runs first, so
/// the default hook prints the panic message to stderr. The hook is global
/// and belongs to the binary, which may replace it with `std::panic::set_hook`.
fn run_engine<T>(text: &str, call: impl FnOnce() -> T) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(call))
        .map_err(|_| SentimentError::ScoringFailed(format!("lexicon engine panicked on {:?}", text)))
}

impl PolarityScorer for VaderScorer {
    /// Compound VADER score of `text`
    ///
    /// A panic inside the engine comes back as `ScoringFailed`, though the
    /// process panic hook still prints its message.
    fn score(&self, text: &str) -> Result<PolarityScore> {
        if text.trim().is_empty() {
            return Ok(PolarityScore::NEUTRAL);
        }

        // The lexicon engine indexes into token windows and can panic on odd input
        let compound = run_engine(text, || {
            self.analyzer
                .polarity_scores(text)
                .get("compound")
                .copied()
        })?
        .ok_or_else(|| SentimentError::ScoringFailed("no compound score produced".to_string()))?;

        if !compound.is_finite() {
            return Err(SentimentError::ScoringFailed(format!(
                "non-finite compound score {}",
                compound
            )));
        }

        PolarityScore::new(compound)
    }

    fn name(&self) -> &str {
        "vader"
    }
}
