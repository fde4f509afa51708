//! Input normalization
//!
//! Turns the raw comma-separated form text into request items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single trimmed, non-empty craft name taken from the user input
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CraftIdea(String);

impl CraftIdea {
    /// Build from an already-trimmed segment. Returns `None` for blank text.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CraftIdea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CraftIdea {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split on `,`, trim every piece and drop empty ones.
///
/// Order is preserved and duplicates are kept.
pub fn parse_craft_ideas(input: &str) -> Vec<CraftIdea> {
    input.split(',').filter_map(CraftIdea::new).collect()
}

/// Inverse of [`parse_craft_ideas`] for display and round trips
pub fn join_craft_ideas(ideas: &[CraftIdea]) -> String {
    ideas
        .iter()
        .map(CraftIdea::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
