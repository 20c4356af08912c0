//! # Headline Pulse
//!
//! `headline_pulse` scores a batch of news headlines, tags each one with a
//! coarse three-band category and sums the scores into a single
//! directional total.
//!
//! Fetching headlines is left to the caller: the loaders here only read
//! already-downloaded batches from JSON or CSV files.
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use headline_pulse::{Aggregator, RawHeadline, DEFAULT_MAX_ITEMS};
//! use sentiment_core::VaderScorer;
//!
//! let aggregator = Aggregator::new(Arc::new(VaderScorer::new()));
//! let batch = vec![
//!     RawHeadline::new("Apple shares soar on record profits", "https://example.com/a", ""),
//!     RawHeadline::new("Regulators fine Apple over app store", "https://example.com/b", ""),
//! ];
//!
//! let summary = aggregator.aggregate(&batch, DEFAULT_MAX_ITEMS);
//! println!("{}", summary.headline());
//! ```

use chrono::{DateTime, FixedOffset};
use sentiment_core::{Category, HeadlineColor, PolarityScore};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod aggregator;
pub mod loader;
pub mod render;

pub use aggregator::Aggregator;
pub use loader::{load_headlines, load_headlines_csv, load_headlines_json};
pub use render::render_markdown;
pub use sentiment_core::config::DEFAULT_MAX_ITEMS;

/// Errors that can occur while loading headline batches
#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Data loading error: {0}")]
    DataLoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A headline as handed over by the feed collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHeadline {
    /// Headline text; the only field that is scored
    pub title: String,
    /// Link to the full article
    #[serde(default)]
    pub link: String,
    /// Publication time exactly as the feed reported it
    #[serde(default)]
    pub published: String,
}

impl RawHeadline {
    pub fn new(title: &str, link: &str, published: &str) -> Self {
        Self {
            title: title.to_string(),
            link: link.to_string(),
            published: published.to_string(),
        }
    }

    /// Parse `published` as RFC 2822 (RSS) or RFC 3339
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_published(&self.published)
    }
}

impl From<&str> for RawHeadline {
    fn from(title: &str) -> Self {
        Self::new(title, "", "")
    }
}

fn parse_published(published: &str) -> Option<DateTime<FixedOffset>> {
    let published = published.trim();
    DateTime::parse_from_rfc2822(published)
        .or_else(|_| DateTime::parse_from_rfc3339(published))
        .ok()
}

/// A scored and categorized headline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub published: String,
    #[serde(rename = "category_name")]
    pub category: Category,
    pub score: PolarityScore,
    #[serde(rename = "color_code")]
    pub color: HeadlineColor,
}

impl NewsItem {
    /// Parsed publication time, when the feed string is a known format
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_published(&self.published)
    }
}

/// Overall lean of a batch, decided by the sign of the total only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    PositiveLeaning,
    NegativeLeaning,
}

impl Direction {
    /// Zero counts as positive-leaning
    pub fn from_total(total: f64) -> Self {
        if total >= 0.0 {
            Direction::PositiveLeaning
        } else {
            Direction::NegativeLeaning
        }
    }

    pub fn color(self) -> HeadlineColor {
        match self {
            Direction::PositiveLeaning => HeadlineColor::Green,
            Direction::NegativeLeaning => HeadlineColor::Red,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::PositiveLeaning => write!(f, "positive-leaning"),
            Direction::NegativeLeaning => write!(f, "negative-leaning"),
        }
    }
}

/// Result of scoring one headline batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PulseSummary {
    /// Sum (not mean) of the retained items' scores
    pub total_score: f64,
    pub direction: Direction,
    pub items: Vec<NewsItem>,
}

impl PulseSummary {
    /// Summary of a batch with no items
    pub fn empty() -> Self {
        Self {
            total_score: 0.0,
            direction: Direction::from_total(0.0),
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Total Sentiment Score: x.xx`
    pub fn headline(&self) -> String {
        format!("Total Sentiment Score: {:.2}", self.total_score)
    }
}
