//! Run state machine
//!
//! The presentation layer never sees mutable slots. It observes a sequence of
//! immutable [`RunState`] values, each produced from the previous one by
//! applying a [`RunEvent`].

use serde::{Deserialize, Serialize};

use super::types::{GeneratedScript, ItemFailure, RunOutcome};

/// Idle → Running → Idle. There is no cancelled or paused phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
}

/// Transition of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    /// Input normalized to zero ideas; no run is started
    Rejected { message: String },
    /// A run over `total` ideas begins
    Started { total: usize },
    ItemSucceeded { index: usize, script: GeneratedScript },
    ItemFailed { index: usize, failure: ItemFailure },
    /// Every idea has been attempted
    Completed,
}

/// Snapshot of the generator as seen by observers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub phase: RunPhase,
    /// Ideas in the current (or last) run
    pub total: usize,
    /// Ideas attempted so far
    pub attempted: usize,
    /// Output of the last completed run; empty while a run is in flight
    pub scripts: Vec<GeneratedScript>,
    /// Latest failure message; cleared when a run starts
    pub error_message: Option<String>,
    /// All failures of the current (or last) run
    pub failures: Vec<ItemFailure>,
    /// Successes of the in-flight run, published on completion
    #[serde(skip)]
    pending: Vec<GeneratedScript>,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Apply one event, producing the next state
    pub fn apply(mut self, event: &RunEvent) -> Self {
        match event {
            RunEvent::Rejected { message } => {
                self = Self {
                    error_message: Some(message.clone()),
                    ..Self::default()
                };
            }
            RunEvent::Started { total } => {
                self = Self {
                    phase: RunPhase::Running,
                    total: *total,
                    ..Self::default()
                };
            }
            RunEvent::ItemSucceeded { script, .. } => {
                self.attempted += 1;
                self.pending.push(script.clone());
            }
            RunEvent::ItemFailed { failure, .. } => {
                self.attempted += 1;
                self.error_message = Some(failure.message.clone());
                self.failures.push(failure.clone());
            }
            RunEvent::Completed => {
                self.phase = RunPhase::Idle;
                self.scripts = std::mem::take(&mut self.pending);
            }
        }
        self
    }

    /// The run's output; only meaningful once the run is idle again
    pub fn outcome(&self) -> RunOutcome {
        RunOutcome {
            scripts: self.scripts.clone(),
            error_message: self.error_message.clone(),
            failures: self.failures.clone(),
        }
    }

    pub fn into_outcome(self) -> RunOutcome {
        RunOutcome {
            scripts: self.scripts,
            error_message: self.error_message,
            failures: self.failures,
        }
    }
}
