//! Batch script generator
//!
//! Sequentially generates one script per craft idea. A failing idea never
//! stops the batch; the final [`RunOutcome`] is handed back in one piece once
//! every idea has been attempted.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{broadcast, watch};
use tracing::{debug, info, instrument, warn};

use crate::core::traits::TextGenerator;
use crate::utils::error::{GenieError, Result};

use super::EMPTY_INPUT_MESSAGE;
use super::input::{CraftIdea, parse_craft_ideas};
use super::prompt::build_prompt;
use super::state::{RunEvent, RunState};
use super::types::{GeneratedScript, ItemFailure, RunOutcome};

/// Capacity of the event channel; slow subscribers see `Lagged`
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Batch Script Generator
///
/// Callers are expected not to start a second run while one is in flight;
/// nothing here prevents it.
pub struct ScriptGenerator {
    backend: Arc<dyn TextGenerator>,
    events: broadcast::Sender<RunEvent>,
    state: watch::Sender<RunState>,
}

impl ScriptGenerator {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let (state, _) = watch::channel(RunState::default());
        Self {
            backend,
            events,
            state,
        }
    }

    /// Subscribe to run events, starting from the next one
    pub fn subscribe(&self) -> broadcast::Receiver<RunEvent> {
        self.events.subscribe()
    }

    /// Watch state snapshots; the receiver always holds the latest one
    pub fn watch(&self) -> watch::Receiver<RunState> {
        self.state.subscribe()
    }

    /// Current snapshot
    pub fn state(&self) -> RunState {
        self.state.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }

    /// Run one batch over the raw comma-separated input.
    ///
    /// Returns [`GenieError::EmptyInput`] without contacting the backend when
    /// the input holds no craft ideas. Otherwise always returns the outcome,
    /// however many items failed.
    #[instrument(skip_all, fields(backend = self.backend.name()))]
    pub async fn run(&self, input: &str) -> Result<RunOutcome> {
        let ideas = parse_craft_ideas(input);
        if ideas.is_empty() {
            warn!("Input contained no craft ideas");
            self.transition(
                self.state(),
                RunEvent::Rejected {
                    message: EMPTY_INPUT_MESSAGE.to_string(),
                },
            );
            return Err(GenieError::EmptyInput);
        }

        let total = ideas.len();
        let started = Instant::now();
        info!(total, "Starting script generation run");

        let mut state = self.transition(self.state(), RunEvent::Started { total });
        for (index, idea) in ideas.into_iter().enumerate() {
            let event = self.generate_one(index, idea).await;
            state = self.transition(state, event);
        }
        let state = self.transition(state, RunEvent::Completed);

        let outcome = state.into_outcome();
        info!(
            total,
            succeeded = outcome.scripts.len(),
            failed = outcome.failures.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Script generation run completed"
        );
        Ok(outcome)
    }

    async fn generate_one(&self, index: usize, idea: CraftIdea) -> RunEvent {
        debug!(index, craft_type = %idea, "Generating script");
        let prompt = build_prompt(&idea);

        match self.backend.generate(&prompt).await {
            Ok(text) => {
                debug!(index, craft_type = %idea, chars = text.len(), "Script generated");
                RunEvent::ItemSucceeded {
                    index,
                    script: GeneratedScript::new(idea, text),
                }
            }
            Err(error) => {
                warn!(index, craft_type = %idea, error = %error, "Script generation failed");
                RunEvent::ItemFailed {
                    index,
                    failure: ItemFailure::from_error(index, idea, &error),
                }
            }
        }
    }

    fn transition(&self, state: RunState, event: RunEvent) -> RunState {
        let next = state.apply(&event);
        self.state.send_replace(next.clone());
        // No subscribers is fine
        let _ = self.events.send(event);
        next
    }
}

/// One-shot convenience wrapper around [`ScriptGenerator::run`]
pub async fn generate_scripts(backend: Arc<dyn TextGenerator>, input: &str) -> Result<RunOutcome> {
    ScriptGenerator::new(backend).run(input).await
}
