//! Error handling for craft-genie
//!
//! This module defines the error types used throughout the crate.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod types;

pub use types::{GenieError, Result};
