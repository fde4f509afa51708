//! Unified Provider Error Handling
//!
//! Single error type for the generative text backends.
//!
//! | Variant | Purpose | HTTP Status |
//! |------|------|------------|
//! | Authentication | Missing or rejected API key | 401/403 |
//! | RateLimit | Quota or rate limit hit | 429 |
//! | ModelNotFound | Unknown model or endpoint | 404 |
//! | InvalidRequest | Rejected request body | 400 |
//! | Network | Transport failure | - |
//! | Timeout | Transport timeout | 408 |
//! | ApiError | Any other non-2xx status | 4xx/5xx |
//! | ResponseParsing | Body is not the expected JSON | 200 |
//! | EmptyResponse | Valid body without generated text | 200 |
//! | ContentFiltered | Generation blocked by safety systems | 200 |
//! | Configuration | Client could not be built | - |
//!
//! ## Usage
//!
//! ```rust
//! use craft_genie::ProviderError;
//!
//! let err = ProviderError::rate_limit("gemini", Some(60));
//! assert!(err.is_transport());
//! assert_eq!(err.http_status(), Some(429));
//! ```

use crate::utils::logging::Sanitization;

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Model '{model}' not found for {provider}")]
    ModelNotFound {
        provider: &'static str,
        model: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    /// API error with status code
    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },

    /// Response decoded fine but carried no generated text
    #[error("Empty response from {provider}: {message}")]
    EmptyResponse {
        provider: &'static str,
        message: String,
    },

    /// Content filtered by safety systems
    #[error("Content filtered by {provider} safety systems: {reason}")]
    ContentFiltered {
        provider: &'static str,
        reason: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create rate limit error
    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            message: match retry_after {
                Some(seconds) => format!("Rate limit exceeded. Retry after {} seconds", seconds),
                None => "Rate limit exceeded".to_string(),
            },
            retry_after,
        }
    }

    /// Create rate limit error with a provider supplied message
    pub fn rate_limit_with_retry(
        provider: &'static str,
        message: impl Into<String>,
        retry_after: Option<u64>,
    ) -> Self {
        Self::RateLimit {
            provider,
            message: message.into(),
            retry_after,
        }
    }

    /// Create model not found error
    pub fn model_not_found(provider: &'static str, model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            provider,
            model: model.into(),
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create API error with status code
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create response parsing error
    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    /// Create empty response error
    pub fn empty_response(provider: &'static str, message: impl Into<String>) -> Self {
        Self::EmptyResponse {
            provider,
            message: message.into(),
        }
    }

    /// Create content filtered error
    pub fn content_filtered(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            provider,
            reason: reason.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Get the provider name
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ModelNotFound { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ResponseParsing { provider, .. }
            | Self::EmptyResponse { provider, .. }
            | Self::ContentFiltered { provider, .. }
            | Self::Configuration { provider, .. } => provider,
        }
    }

    /// Whether the call failed before a usable response body was obtained.
    ///
    /// Everything except an empty or filtered generation counts as a
    /// transport failure from the batch's point of view.
    pub fn is_transport(&self) -> bool {
        !matches!(
            self,
            Self::EmptyResponse { .. } | Self::ContentFiltered { .. }
        )
    }

    /// HTTP status this error corresponds to, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::RateLimit { .. } => Some(429),
            Self::ModelNotFound { .. } => Some(404),
            Self::InvalidRequest { .. } => Some(400),
            Self::Timeout { .. } => Some(408),
            Self::ApiError { status, .. } => Some(*status),
            Self::ResponseParsing { .. }
            | Self::EmptyResponse { .. }
            | Self::ContentFiltered { .. } => Some(200),
            Self::Network { .. } | Self::Configuration { .. } => None,
        }
    }

    /// Retry delay hinted by the provider, in seconds
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

// Request URLs are dropped from the message; it ends up in logs and output
impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        let (timeout, decode) = (error.is_timeout(), error.is_decode());
        let message = Sanitization::sanitize_log_data(&error.without_url().to_string());
        if timeout {
            Self::timeout("gemini", message)
        } else if decode {
            Self::response_parsing("gemini", message)
        } else {
            Self::network("gemini", message)
        }
    }
}
