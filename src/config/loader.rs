//! Configuration loading utilities
//!
//! Environment overlay for [`Config`].

use super::Config;
use crate::utils::error::{GenieError, Result};
use tracing::debug;

impl Config {
    /// Load configuration from an arbitrary key lookup
    ///
    /// Gemini settings come from `GEMINI_*` variables (see
    /// [`GeminiConfig::apply_lookup`](crate::core::providers::gemini::GeminiConfig::apply_lookup)); logging and output settings from
    /// `GENIE_*` variables. Unset variables keep their defaults, so the
    /// result may still lack an API key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.gemini.apply_lookup(&lookup)?;

        if let Some(level) = lookup("GENIE_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = lookup("GENIE_LOG_FORMAT") {
            config.logging.format = format.parse().map_err(GenieError::Config)?;
        }
        if let Some(format) = lookup("GENIE_OUTPUT_FORMAT") {
            config.output.format = format.parse().map_err(GenieError::Config)?;
        }
        if let Some(path) = lookup("GENIE_OUTPUT_PATH") {
            config.output.path = Some(path.into());
        }

        Ok(config)
    }
}
