//! Configuration data models

#![allow(missing_docs)]

pub mod logging;
pub mod output;
pub mod provider;

pub use crate::core::providers::gemini::GeminiConfig;
pub use logging::*;
pub use output::*;

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
