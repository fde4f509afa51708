//! Generative text providers

pub mod gemini;
pub mod unified_provider;

pub use gemini::GeminiProvider;
pub use unified_provider::ProviderError;
