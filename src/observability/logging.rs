//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Pick pretty or JSON output from config
//! - Honor `RUST_LOG`, else the configured level

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter {directive:?}: {source}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install global subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level).map_err(|source| LoggingError::Filter {
        directive: config.log_level.clone(),
        source,
    })
}

/// Install the global subscriber. Call once per process.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_parses() {
        let config = ObservabilityConfig {
            log_level: "hostname_relay=debug,tower_http=info".into(),
            ..Default::default()
        };
        assert!(build_filter(&config).is_ok());
    }
}
