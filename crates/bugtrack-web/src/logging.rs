// File: src/logging.rs
// Purpose: tracing subscriber setup for the binary

use anyhow::{anyhow, Result};
use tracing::Level;

use crate::config::LoggingConfig;

/// Parses the configured level name (case-insensitive)
pub fn parse_level(name: &str) -> Result<Level> {
    name.trim()
        .parse::<Level>()
        .map_err(|_| anyhow!("unknown log level '{}'", name))
}

/// Installs the global fmt subscriber.
///
/// An unknown level falls back to `info` with a warning instead of failing.
pub fn init(config: &LoggingConfig) {
    let (level, rejected) = match parse_level(&config.level) {
        Ok(level) => (level, None),
        Err(err) => (Level::INFO, Some(err)),
    };

    // A second init (e.g. in tests) keeps the existing subscriber
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();

    if let Some(err) = rejected {
        tracing::warn!("{}, using info", err);
    }
}
