//! Gemini Provider Implementation
//!
//! [`TextGenerator`] on top of [`GeminiClient`].

use async_trait::async_trait;
use tracing::debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::{ProviderConfig, TextGenerator};

use super::client::GeminiClient;
use super::config::GeminiConfig;
use super::models::{GenerateContentRequest, GenerateContentResponse};

/// Gemini Provider
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    /// Create
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration("gemini", e))?;

        let client = GeminiClient::new(config)?;

        Ok(Self { client })
    }

    pub fn model(&self) -> &str {
        &self.client.config().model
    }

    /// Pull the generated text out of a decoded response.
    ///
    /// Only the first text part of the first candidate is read; an absent or
    /// empty part is an empty generation.
    pub fn extract_text(response: &GenerateContentResponse) -> Result<String, ProviderError> {
        match response.first_text() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => {
                if let Some(reason) = response.block_reason() {
                    return Err(ProviderError::content_filtered(
                        "gemini",
                        format!("prompt blocked ({})", reason),
                    ));
                }
                match response.finish_reason() {
                    Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                        Err(ProviderError::content_filtered("gemini", reason))
                    }
                    Some(reason) => Err(ProviderError::empty_response(
                        "gemini",
                        format!("no text in first candidate (finish reason {})", reason),
                    )),
                    None if response.candidates.is_empty() => {
                        Err(ProviderError::empty_response("gemini", "no candidates in response"))
                    }
                    None => Err(ProviderError::empty_response(
                        "gemini",
                        "no text in first candidate",
                    )),
                }
            }
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        debug!(model = %self.model(), prompt_chars = prompt.len(), "Calling generateContent");
        let request = GenerateContentRequest::user_text(prompt);
        let response = self.client.generate_content(&request).await?;
        Self::extract_text(&response)
    }
}
