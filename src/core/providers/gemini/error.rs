//! Gemini Error Handling
//!
//! Maps HTTP statuses and Google error envelopes onto [`ProviderError`].

use serde_json::Value;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ErrorMapper;

pub type GeminiError = ProviderError;

/// Error mapper for the Gemini API
pub struct GeminiErrorMapper;

impl ErrorMapper for GeminiErrorMapper {
    fn map_http_error(&self, status_code: u16, response_body: &str) -> ProviderError {
        Self::from_http_status(status_code, response_body)
    }

    fn map_api_error(&self, response: &Value) -> Option<ProviderError> {
        response.get("error").map(Self::from_error_envelope)
    }
}

impl GeminiErrorMapper {
    /// Error for a non-2xx status
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        // Google returns a JSON envelope for most failures; prefer its message
        if let Ok(json) = serde_json::from_str::<Value>(body) {
            if let Some(error) = json.get("error") {
                let mut mapped = Self::from_error_envelope(error);
                if let ProviderError::ApiError { status: code, .. } = &mut mapped {
                    *code = status;
                }
                return mapped;
            }
        }

        match status {
            400 => ProviderError::invalid_request("gemini", format!("Bad request: {}", body)),
            401 => ProviderError::authentication("gemini", "Invalid or missing API key"),
            403 => ProviderError::authentication("gemini", "Forbidden: insufficient permissions"),
            404 => ProviderError::model_not_found("gemini", "Model or endpoint not found"),
            408 | 504 => ProviderError::timeout("gemini", format!("Upstream timeout: {}", body)),
            429 => ProviderError::rate_limit("gemini", None),
            500..=599 => {
                ProviderError::api_error("gemini", status, format!("Server error: {}", body))
            }
            _ => ProviderError::api_error("gemini", status, body),
        }
    }

    /// Error for a Google `{"error": {...}}` envelope
    pub fn from_error_envelope(error: &Value) -> ProviderError {
        let code = error.get("code").and_then(|c| c.as_u64()).unwrap_or(500) as u16;
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error");
        let status = error.get("status").and_then(|s| s.as_str()).unwrap_or("");

        match (code, status) {
            (401, _) | (_, "UNAUTHENTICATED") => ProviderError::authentication("gemini", message),
            (403, _) | (_, "PERMISSION_DENIED") => ProviderError::authentication("gemini", message),
            (404, _) | (_, "NOT_FOUND") => ProviderError::model_not_found("gemini", message),
            (429, _) | (_, "RESOURCE_EXHAUSTED") => ProviderError::rate_limit_with_retry(
                "gemini",
                message,
                Self::extract_retry_after(error),
            ),
            (400, _) | (_, "INVALID_ARGUMENT") | (_, "FAILED_PRECONDITION") => {
                ProviderError::invalid_request("gemini", message)
            }
            (504, _) | (_, "DEADLINE_EXCEEDED") => ProviderError::timeout("gemini", message),
            _ => ProviderError::api_error("gemini", code, message),
        }
    }

    /// Retry delay in seconds, from `retry_after` or a `RetryInfo` detail (`"30s"`)
    fn extract_retry_after(error: &Value) -> Option<u64> {
        if let Some(retry_after) = error.get("retry_after").and_then(|r| r.as_u64()) {
            return Some(retry_after);
        }

        error
            .get("details")
            .and_then(|d| d.as_array())?
            .iter()
            .find_map(|detail| {
                detail
                    .get("retry_after")
                    .and_then(|r| r.as_u64())
                    .or_else(|| {
                        detail
                            .get("retryDelay")
                            .and_then(|r| r.as_str())
                            .and_then(|r| r.trim_end_matches('s').parse::<f64>().ok())
                            .map(|secs| secs.ceil() as u64)
                    })
            })
    }
}
