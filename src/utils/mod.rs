//! Utility modules
//!
//! - **error**: error types and conversions
//! - **logging**: subscriber setup and log sanitization

pub mod error;
pub mod logging;

pub use logging::{Sanitization, init_logging};
