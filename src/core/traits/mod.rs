//! Core traits module
//!
//! Contains the abstract interfaces the batch generator is written against

pub mod error_mapper;
pub mod provider;

pub use error_mapper::*;
pub use provider::*;
