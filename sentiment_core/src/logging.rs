//! Subscriber setup for the binaries

use crate::{EngineConfig, Result};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over the configured level. Calling this
/// more than once is harmless; later calls leave the first subscriber in
/// place.
pub fn init(config: &EngineConfig) -> Result<()> {
    config.level_filter()?;
    let level = config.log_level.trim().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        let config = EngineConfig::default();
        assert!(init(&config).is_ok());
        assert!(init(&config).is_ok());
    }

    #[test]
    fn test_init_rejects_bad_level() {
        let config = EngineConfig {
            log_level: "chatty".to_string(),
            ..EngineConfig::default()
        };
        assert!(init(&config).is_err());
    }
}
