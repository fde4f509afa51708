//! Error types for craft-genie

use crate::core::providers::unified_provider::ProviderError;
use crate::core::script::EMPTY_INPUT_MESSAGE;
use thiserror::Error;

/// Result type alias for craft-genie
pub type Result<T> = std::result::Result<T, GenieError>;

/// Main error type for craft-genie
#[derive(Error, Debug)]
pub enum GenieError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(ProviderError),

    /// No craft ideas left after normalizing the input
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    /// Output rendering or writing errors
    #[error("Output error: {0}")]
    Output(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
