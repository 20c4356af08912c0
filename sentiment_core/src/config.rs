//! Runtime configuration
//!
//! Classification thresholds are fixed and deliberately absent here. The
//! config only covers batch size, which granularities to annotate and the
//! log level.

use crate::{Granularity, Result, SentimentError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Default number of headlines kept per batch
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Default log level when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Engine configuration
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum headlines retained from the front of a batch
    pub max_items: usize,
    /// Granularities produced for each annotation request, in order
    pub granularities: Vec<Granularity>,
    /// Log level passed to the subscriber
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            granularities: Granularity::ALL.to_vec(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the config for values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.granularities.is_empty() {
            return Err(SentimentError::InvalidConfig(
                "at least one granularity is required".to_string(),
            ));
        }

        for (i, g) in self.granularities.iter().enumerate() {
            if self.granularities[..i].contains(g) {
                return Err(SentimentError::InvalidConfig(format!(
                    "granularity '{}' listed more than once",
                    g
                )));
            }
        }

        self.level_filter()?;
        Ok(())
    }

    /// The configured log level as a filter
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|_| {
            SentimentError::InvalidConfig(format!("unknown log level '{}'", self.log_level))
        })
    }
}
