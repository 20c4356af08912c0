//! Batch scoring and summation

use crate::{Direction, NewsItem, PulseSummary, RawHeadline};
use sentiment_core::{score_or_neutral, ClassificationPolicy, PolarityScorer, ThreeBandPolicy};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Scores headline batches with the three-band policy
#[derive(Clone)]
pub struct Aggregator {
    scorer: Arc<dyn PolarityScorer>,
    policy: ThreeBandPolicy,
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator")
            .field("scorer", &self.scorer.name())
            .field("policy", &self.policy)
            .finish()
    }
}

impl Aggregator {
    /// Create an aggregator around an already initialized scorer
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self {
            scorer,
            policy: ThreeBandPolicy,
        }
    }

    /// Score up to `max_items` headlines from the front of `items`
    ///
    /// Source order is kept. Each title is scored on its own; the total is
    /// the plain sum of the kept scores. An empty batch gives a zero total
    /// and no items.
    pub fn aggregate(&self, items: &[RawHeadline], max_items: usize) -> PulseSummary {
        let news_items: Vec<NewsItem> = items
            .iter()
            .take(max_items)
            .map(|raw| self.score_item(raw))
            .collect();

        let total_score: f64 = news_items.iter().map(|item| item.score.value()).sum();

        debug!(
            received = items.len(),
            kept = news_items.len(),
            total_score,
            "aggregated headline batch"
        );

        PulseSummary {
            total_score,
            direction: Direction::from_total(total_score),
            items: news_items,
        }
    }

    /// Same as [`Aggregator::aggregate`] for bare titles
    pub fn aggregate_titles(&self, titles: &[&str], max_items: usize) -> PulseSummary {
        let items: Vec<RawHeadline> = titles.iter().map(|&t| RawHeadline::from(t)).collect();
        self.aggregate(&items, max_items)
    }

    fn score_item(&self, raw: &RawHeadline) -> NewsItem {
        let score = score_or_neutral(self.scorer.as_ref(), &raw.title);
        let (category, color) = self.policy.classify(score);
        NewsItem {
            title: raw.title.clone(),
            link: raw.link.clone(),
            published: raw.published.clone(),
            category,
            score,
            color,
        }
    }
}
