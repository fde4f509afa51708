//! Integration tests for craft-genie
//!
//! These tests drive whole runs through the public API, against either the
//! scripted generator or a local mock of the Gemini HTTP API.

pub mod batch_tests;
pub mod config_tests;
pub mod gemini_client_tests;
