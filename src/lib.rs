//! # craft-genie
//!
//! Generate short craft video scripts from a comma-separated list of craft
//! ideas, one Gemini `generateContent` call per idea.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use craft_genie::{Config, GeminiProvider, ScriptGenerator, render_markdown};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let provider = GeminiProvider::new(config.gemini)?;
//!     let generator = ScriptGenerator::new(Arc::new(provider));
//!
//!     let outcome = generator.run("macrame plant hanger, paper lanterns").await?;
//!     if let Some(message) = &outcome.error_message {
//!         eprintln!("{}", message);
//!     }
//!     println!("{}", render_markdown(&outcome.scripts));
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod render;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GenieError, Result};
pub use utils::logging::init_logging;

pub use core::providers::{GeminiProvider, ProviderError};
pub use core::script::{
    CraftIdea, EMPTY_INPUT_MESSAGE, FailureKind, GeneratedScript, ItemFailure, RunEvent,
    RunOutcome, RunPhase, RunState, ScriptGenerator, build_prompt, generate_scripts,
    parse_craft_ideas,
};
pub use core::traits::TextGenerator;
pub use render::{render_json, render_markdown};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Unix timestamp of the build
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

impl BuildInfo {
    /// Long form used by `--version`
    pub fn long_version(&self) -> String {
        format!(
            "{} (git {}, built {}, {})",
            self.version, self.git_hash, self.build_time, self.rust_version
        )
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
