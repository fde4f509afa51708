//! Validators for the configuration sections

use super::trait_def::Validate;
use crate::config::models::{GeminiConfig, LoggingConfig, OutputConfig};
use crate::core::traits::ProviderConfig;
use tracing_subscriber::EnvFilter;

impl Validate for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        ProviderConfig::validate(self)
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;
        Ok(())
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err("Output path cannot be empty".to_string());
            }
            if path.is_dir() {
                return Err(format!("Output path {:?} is a directory", path));
            }
        }
        Ok(())
    }
}
