//! Error mapping
//!
//! Translates provider HTTP failures into [`ProviderError`].

use crate::core::providers::unified_provider::ProviderError;
use serde_json::Value;

/// Maps raw provider failures onto the unified error type
///
/// # Implementation Guide
///
/// ```rust
/// use craft_genie::ProviderError;
/// use craft_genie::core::traits::ErrorMapper;
/// use serde_json::Value;
///
/// struct PlainMapper;
///
/// impl ErrorMapper for PlainMapper {
///     fn map_http_error(&self, status: u16, body: &str) -> ProviderError {
///         ProviderError::api_error("plain", status, body)
///     }
/// }
///
/// let err = PlainMapper.map_http_error(502, "bad gateway");
/// assert_eq!(err.http_status(), Some(502));
/// assert!(PlainMapper.map_api_error(&Value::Null).is_none());
/// ```
pub trait ErrorMapper: Send + Sync + 'static {
    /// Map a non-2xx response
    fn map_http_error(&self, status_code: u16, response_body: &str) -> ProviderError;

    /// Map an error embedded in an otherwise successful response body
    fn map_api_error(&self, _response: &Value) -> Option<ProviderError> {
        None
    }
}
