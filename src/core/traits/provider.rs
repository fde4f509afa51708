//! Provider traits
//!
//! [`TextGenerator`] is the seam between the batch generator and the
//! generative text service. The batch only ever needs "prompt in, text out".

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::providers::unified_provider::ProviderError;

/// Generative text backend
///
/// Implementations perform exactly one outbound call per `generate` and never
/// retry. An `Ok` value is guaranteed to be non-empty; an empty generation
/// is reported as [`ProviderError::EmptyResponse`] and callers do not re-check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name used in logs
    fn name(&self) -> &'static str;

    /// Generate text for a single prompt
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Provider configuration
pub trait ProviderConfig: Send + Sync + Clone + Debug + 'static {
    /// Validate configuration
    ///
    /// Returns `Err` with a human readable reason when the configuration
    /// cannot be used to build a client.
    fn validate(&self) -> Result<(), String>;

    /// Get API key
    fn api_key(&self) -> Option<&str>;
}
