//! Provider configuration merging

use crate::core::providers::gemini::GeminiConfig;

impl GeminiConfig {
    /// Merge Gemini configurations; values of `other` that differ from the
    /// defaults win
    pub fn merge(mut self, other: Self) -> Self {
        let defaults = GeminiConfig::default();

        if other.api_key.as_deref().is_some_and(|key| !key.is_empty()) {
            self.api_key = other.api_key;
        }
        if other.base_url != defaults.base_url {
            self.base_url = other.base_url;
        }
        if other.api_version != defaults.api_version {
            self.api_version = other.api_version;
        }
        if other.model != defaults.model {
            self.model = other.model;
        }
        if other.request_timeout != defaults.request_timeout {
            self.request_timeout = other.request_timeout;
        }
        if other.connect_timeout != defaults.connect_timeout {
            self.connect_timeout = other.connect_timeout;
        }
        self.custom_headers.extend(other.custom_headers);
        if other.proxy_url.is_some() {
            self.proxy_url = other.proxy_url;
        }
        if other.debug {
            self.debug = other.debug;
        }
        self
    }
}
