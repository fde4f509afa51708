//! Result types of a generation run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::providers::unified_provider::ProviderError;

use super::input::CraftIdea;

/// One successfully generated script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedScript {
    /// Unique id, distinct even for duplicate ideas
    pub id: Uuid,
    /// The craft idea this script was generated for
    pub craft_type: CraftIdea,
    /// Markdown body returned by the model
    pub script: String,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedScript {
    pub fn new(craft_type: CraftIdea, script: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            craft_type,
            script,
            generated_at: Utc::now(),
        }
    }
}

/// Why an item produced no script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The call itself failed (network, non-2xx status, unreadable body)
    Transport,
    /// The service answered but without any generated text
    EmptyResponse,
}

impl FailureKind {
    pub fn classify(error: &ProviderError) -> Self {
        if error.is_transport() {
            Self::Transport
        } else {
            Self::EmptyResponse
        }
    }

    /// User-facing message naming the failed idea
    pub fn user_message(self, idea: &CraftIdea) -> String {
        match self {
            Self::Transport => format!("An error occurred for \"{}\". Please try again.", idea),
            Self::EmptyResponse => format!(
                "Failed to generate script for \"{}\". Please try a different prompt.",
                idea
            ),
        }
    }
}

/// A per-item failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFailure {
    /// Position of the idea in the normalized input
    pub index: usize,
    pub craft_type: CraftIdea,
    pub kind: FailureKind,
    /// Message shown to the user
    pub message: String,
    /// Underlying error, for logs
    pub detail: String,
}

impl ItemFailure {
    pub fn from_error(index: usize, craft_type: CraftIdea, error: &ProviderError) -> Self {
        let kind = FailureKind::classify(error);
        Self {
            index,
            message: kind.user_message(&craft_type),
            craft_type,
            kind,
            detail: error.to_string(),
        }
    }
}

/// Final output of one run, produced atomically when the run completes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Scripts in input order
    pub scripts: Vec<GeneratedScript>,
    /// Message of the last failing item, if any
    pub error_message: Option<String>,
    /// Every failure of the run, in input order
    pub failures: Vec<ItemFailure>,
}

impl RunOutcome {
    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.scripts.len() + self.failures.len()
    }
}
