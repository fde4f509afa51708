//! Batch craft video script generation
//!
//! Raw form text goes in, an ordered list of generated scripts and the
//! latest per-item error come out:
//!
//! 1. [`parse_craft_ideas`] splits the input on `,`, trims and drops blanks.
//! 2. [`ScriptGenerator::run`] calls the backend once per idea, strictly in
//!    order, folding each result into a [`RunState`].
//! 3. The final [`RunOutcome`] replaces whatever the previous run produced.

mod generator;
mod input;
mod prompt;
mod state;
mod types;

pub use generator::{ScriptGenerator, generate_scripts};
pub use input::{CraftIdea, join_craft_ideas, parse_craft_ideas};
pub use prompt::{PROMPT_TEMPLATE, build_prompt};
pub use state::{RunEvent, RunPhase, RunState};
pub use types::{FailureKind, GeneratedScript, ItemFailure, RunOutcome};

/// Shown when the input holds no craft ideas
pub const EMPTY_INPUT_MESSAGE: &str =
    "Please enter at least one craft idea to generate a video script.";
