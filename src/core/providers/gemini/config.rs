//! Gemini Configuration Module
//!
//! Connection settings for the Google AI Studio `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ProviderConfig;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v1beta";
/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key (Google AI Studio)
    pub api_key: Option<String>,

    /// Base URL
    pub base_url: String,

    /// API version
    pub api_version: String,

    /// Model used for every generation call
    pub model: String,

    /// Request timeout (seconds)
    pub request_timeout: u64,

    /// Connection timeout (seconds)
    pub connect_timeout: u64,

    /// Extra headers sent with every request
    pub custom_headers: HashMap<String, String>,

    /// Proxy URL
    pub proxy_url: Option<String>,

    /// Log request and response bodies at debug level
    pub debug: bool,
}

impl GeminiConfig {
    /// Create a Google AI Studio configuration
    pub fn new_google_ai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: 120,
            connect_timeout: 10,
            custom_headers: HashMap::new(),
            proxy_url: None,
            debug: false,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    ///
    /// `GEMINI_API_KEY` wins over `GOOGLE_API_KEY` when both are set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_lookup(lookup)?;
        if config.api_key.is_none() {
            return Err(ProviderError::configuration(
                "gemini",
                "No API key found (set GEMINI_API_KEY or GOOGLE_API_KEY)",
            ));
        }
        Ok(config)
    }

    /// Overwrite fields with whichever `GEMINI_*` variables are set
    pub fn apply_lookup<F>(&mut self, lookup: F) -> Result<(), ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("GEMINI_API_KEY").or_else(|| lookup("GOOGLE_API_KEY")) {
            self.api_key = Some(api_key);
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(api_version) = lookup("GEMINI_API_VERSION") {
            self.api_version = api_version;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.model = model;
        }
        if let Some(timeout) = lookup("GEMINI_TIMEOUT") {
            self.request_timeout = timeout.parse().map_err(|e| {
                ProviderError::configuration("gemini", format!("Invalid GEMINI_TIMEOUT: {}", e))
            })?;
        }
        Ok(())
    }

    /// Settings
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Settings
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Settings
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Full operation URL. The key is sent as a header, never in the URL.
    pub fn get_endpoint(&self, operation: &str) -> String {
        format!(
            "{}/{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.model,
            operation
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            ..Self::new_google_ai("")
        }
    }
}

impl ProviderConfig for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        match self.api_key.as_deref() {
            None | Some("") => return Err("API key is required for Google AI Studio".to_string()),
            Some(_) => {}
        }

        let base_url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base URL '{}': {}", self.base_url, e))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(format!(
                "Base URL must use http or https, got '{}'",
                base_url.scheme()
            ));
        }

        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        if self.request_timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.connect_timeout == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if self.connect_timeout > self.request_timeout {
            return Err("Connect timeout cannot be greater than request timeout".to_string());
        }

        Ok(())
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Builder for [`GeminiConfig`]
pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl GeminiConfigBuilder {
    /// Create
    pub fn google_ai(api_key: impl Into<String>) -> Self {
        Self {
            config: GeminiConfig::new_google_ai(api_key),
        }
    }

    /// Settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Settings
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Settings
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.request_timeout = timeout_secs;
        self
    }

    /// Settings
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.custom_headers.insert(name.into(), value.into());
        self
    }

    /// Settings
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Configuration
    pub fn build(self) -> Result<GeminiConfig, ProviderError> {
        self.config
            .validate()
            .map_err(|e| ProviderError::configuration("gemini", e))?;
        Ok(self.config)
    }
}
