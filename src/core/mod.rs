//! Core functionality
//!
//! Script generation logic and the generative text backends it drives.

pub mod providers;
pub mod script;
pub mod traits;
