//! # MoodOwl
//!
//! `mood_owl_workspace` wires the MoodOwl crates together. A [`MoodOwl`] is
//! built once at startup: it loads a single scorer and shares it between
//! the text annotator and the headline aggregator.
//!
//! ## Example
//!
//! ```no_run
//! use mood_owl_workspace::MoodOwl;
//! use sentiment_core::EngineConfig;
//!
//! let owl = MoodOwl::new(EngineConfig::default()).unwrap();
//! let report = owl.annotate("Markets rallied. Bonds slumped.");
//! let pulse = owl.pulse_titles(&["Shares soar on strong demand"]);
//!
//! println!("{} sections, {}", report.sections.len(), pulse.headline());
//! ```

use std::sync::Arc;

pub use headline_pulse::{Aggregator, NewsItem, PulseSummary, RawHeadline};
pub use sentiment_core::{EngineConfig, Granularity, PolarityScorer, SentimentError, VaderScorer};
pub use text_annotate::{Annotation, AnnotationReport, Annotator};

/// Annotator and aggregator sharing one immutable scorer
#[derive(Debug, Clone)]
pub struct MoodOwl {
    config: EngineConfig,
    annotator: Annotator,
    aggregator: Aggregator,
}

impl MoodOwl {
    /// Validate `config` and initialize the VADER scorer
    pub fn new(config: EngineConfig) -> sentiment_core::Result<Self> {
        Self::with_scorer(config, Arc::new(VaderScorer::new()))
    }

    /// Validate `config` and use the given scorer for every request
    pub fn with_scorer(
        config: EngineConfig,
        scorer: Arc<dyn PolarityScorer>,
    ) -> sentiment_core::Result<Self> {
        config.validate()?;
        tracing::info!(
            scorer = scorer.name(),
            max_items = config.max_items,
            "sentiment engine ready"
        );
        Ok(Self {
            annotator: Annotator::new(Arc::clone(&scorer)),
            aggregator: Aggregator::new(scorer),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Annotate `text` at every configured granularity
    pub fn annotate(&self, text: &str) -> AnnotationReport {
        self.annotator.annotate_many(text, &self.config.granularities)
    }

    /// Score a headline batch, keeping at most the configured number of items
    pub fn pulse(&self, items: &[RawHeadline]) -> PulseSummary {
        self.aggregator.aggregate(items, self.config.max_items)
    }

    /// Same as [`MoodOwl::pulse`] for bare titles
    pub fn pulse_titles(&self, titles: &[&str]) -> PulseSummary {
        self.aggregator.aggregate_titles(titles, self.config.max_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use sentiment_core::mock_scorers::TableScorer;
    use sentiment_core::Category;

    fn table_owl(config: EngineConfig) -> MoodOwl {
        let scorer = TableScorer::new([
            ("I love this!", 0.67),
            ("I hate that.", -0.57),
            ("Up", 0.6),
            ("Down", -0.2),
            ("Flat", 0.0),
        ]);
        MoodOwl::with_scorer(config, Arc::new(scorer)).unwrap()
    }

    #[test]
    fn test_annotate_uses_configured_granularities() {
        let config = EngineConfig {
            granularities: vec![Granularity::Sentence],
            ..EngineConfig::default()
        };
        let report = table_owl(config).annotate("I love this! I hate that.");

        assert_eq!(report.sections.len(), 1);
        let sentences = report.get(Granularity::Sentence).unwrap();
        assert_eq!(sentences[0].category, Category::Positive);
        assert_eq!(sentences[1].category, Category::Negative);
    }

    #[test]
    fn test_pulse_uses_configured_limit() {
        let config = EngineConfig {
            max_items: 2,
            ..EngineConfig::default()
        };
        let summary = table_owl(config).pulse_titles(&["Up", "Down", "Flat"]);

        assert_eq!(summary.items.len(), 2);
        assert_relative_eq!(summary.total_score, 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            granularities: vec![],
            ..EngineConfig::default()
        };
        let result = MoodOwl::with_scorer(config, Arc::new(TableScorer::default()));
        assert!(matches!(result, Err(SentimentError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_engine_reports_all_granularities() {
        let owl = table_owl(EngineConfig::default());
        let report = owl.annotate("Up\nDown");
        let order: Vec<Granularity> = report.sections.iter().map(|s| s.granularity).collect();
        assert_eq!(order, Granularity::ALL.to_vec());
        assert_eq!(owl.config().max_items, 10);
    }
}
