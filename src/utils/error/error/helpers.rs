//! Helper functions for creating specific error types

use super::types::GenieError;

impl GenieError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output(message.into())
    }
}
