//! Type conversions for GenieError

use super::types::GenieError;
use crate::core::providers::unified_provider::ProviderError;

// Client construction problems are configuration problems for the caller
impl From<ProviderError> for GenieError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration { message, .. } => GenieError::Config(message),
            other => GenieError::Provider(other),
        }
    }
}
