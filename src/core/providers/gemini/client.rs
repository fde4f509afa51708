//! Gemini Client
//!
//! Thin HTTP client for the `generateContent` operation. One call, no retries.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::{ErrorMapper, ProviderConfig};
use crate::utils::logging::Sanitization;

use super::config::GeminiConfig;
use super::error::GeminiErrorMapper;
use super::models::{GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-goog-api-key");

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    /// Create
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .default_headers(Self::build_headers(&config)?);

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                ProviderError::configuration("gemini", format!("Invalid proxy URL: {}", e))
            })?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder.build().map_err(|e| {
            ProviderError::configuration("gemini", format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Send one `generateContent` request
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.config.get_endpoint("generateContent");

        if self.config.debug {
            debug!("Gemini request URL: {}", Sanitization::redact_url(&url));
            debug!(
                "Gemini request body: {}",
                serde_json::to_string_pretty(request).unwrap_or_default()
            );
        }

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ProviderError::from)?;

        self.handle_response(response).await
    }

    fn build_headers(config: &GeminiConfig) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = config.api_key() {
            let mut value = HeaderValue::from_str(api_key).map_err(|e| {
                ProviderError::configuration("gemini", format!("Invalid API key: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        for (key, value) in &config.custom_headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                ProviderError::configuration("gemini", format!("Invalid header name: {}", e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ProviderError::configuration("gemini", format!("Invalid header value: {}", e))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Handle
    async fn handle_response(
        &self,
        response: Response,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            ProviderError::network("gemini", format!("Failed to read response: {}", e))
        })?;

        if self.config.debug {
            debug!("Gemini response status: {}", status);
            debug!("Gemini response body: {}", response_text);
        }

        if !status.is_success() {
            return Err(GeminiErrorMapper.map_http_error(status.as_u16(), &response_text));
        }

        let json_response: Value = serde_json::from_str(&response_text).map_err(|e| {
            ProviderError::response_parsing(
                "gemini",
                format!("Failed to parse response JSON: {}", e),
            )
        })?;

        if let Some(error) = GeminiErrorMapper.map_api_error(&json_response) {
            return Err(error);
        }

        serde_json::from_value(json_response).map_err(|e| {
            ProviderError::response_parsing("gemini", format!("Unexpected response shape: {}", e))
        })
    }
}
