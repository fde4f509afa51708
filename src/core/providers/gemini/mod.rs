//! Google Gemini Provider
//!
//! Google AI Studio `generateContent` backend for the script generator.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;

// Re-export main types
pub use client::GeminiClient;
pub use config::{GeminiConfig, GeminiConfigBuilder};
pub use error::{GeminiError, GeminiErrorMapper};
pub use models::{GenerateContentRequest, GenerateContentResponse};
pub use provider::GeminiProvider;

/// Create
pub fn create_gemini_provider(config: GeminiConfig) -> Result<GeminiProvider, GeminiError> {
    GeminiProvider::new(config)
}

/// Create
pub fn create_gemini_provider_from_env() -> Result<GeminiProvider, GeminiError> {
    let config = GeminiConfig::from_env()?;
    GeminiProvider::new(config)
}
