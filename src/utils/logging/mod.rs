//! Logging setup
//!
//! Installs the global `tracing` subscriber and scrubs secrets from log data.

mod sanitization;

pub use sanitization::Sanitization;

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{GenieError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for a logging configuration; `RUST_LOG` wins when set
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| GenieError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Install the global subscriber
///
/// Logs go to stderr so rendered scripts on stdout stay clean. Calling this
/// twice is an error.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.target)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| GenieError::config(format!("Failed to initialize logging: {}", e)))
}
