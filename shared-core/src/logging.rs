//! Process-wide `tracing` subscriber set up from configuration.

use shared_core_config::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration key holding the filter directives.
pub const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install the global subscriber: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the filter named by `LOG_LEVEL`, e.g. `debug` or
/// `info,shared_core_http=trace`. Falls back to `info` when unset or empty.
pub fn filter_from_config(config: &Config) -> Result<EnvFilter, LoggingError> {
    let directives = config.get_or(LOG_LEVEL_KEY, DEFAULT_LOG_LEVEL);
    EnvFilter::try_new(directives).map_err(|source| LoggingError::InvalidFilter {
        filter: directives.to_string(),
        source,
    })
}

/// Install a `fmt` subscriber filtered by [`filter_from_config`].
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init(config: &Config) -> Result<(), LoggingError> {
    let filter = filter_from_config(config)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()?;
    tracing::debug!(filter = config.get_or(LOG_LEVEL_KEY, DEFAULT_LOG_LEVEL), "logging initialised");
    Ok(())
}
