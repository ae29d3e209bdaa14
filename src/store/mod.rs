//! The owned state handle.
//!
//! A [`Store`] holds the authoritative [`TournamentState`] and applies actions
//! to it one at a time. It is the imperative shell around the pure core: it
//! owns the only mutable binding, logs what happened and keeps a
//! [`StateHistory`] of every dispatched action.
//!
//! There is no locking here. Callers that receive actions concurrently must
//! serialize them before they reach [`Store::dispatch`], for example by owning
//! the store from a single task.

mod builder;
mod error;
mod history;

pub use builder::StoreBuilder;
pub use error::BuildError;
pub use history::{StateHistory, StateTransition};

use crate::core::{Phase, TournamentState};
use crate::dispatch::{reduce, Action, DispatchError};
use chrono::Utc;
use uuid::Uuid;

/// Owner of the authoritative tournament state.
#[derive(Clone, Debug)]
pub struct Store {
    id: Uuid,
    state: TournamentState,
    history: StateHistory,
}

impl Store {
    /// Create a store with a random id, an empty state and unbounded history.
    pub fn new() -> Self {
        Self::with_parts(Uuid::new_v4(), StateHistory::new())
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub(crate) fn with_parts(id: Uuid, history: StateHistory) -> Self {
        Self {
            id,
            state: TournamentState::default(),
            history,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &TournamentState {
        &self.state
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn into_state(self) -> TournamentState {
        self.state
    }

    /// Apply one action and return the new state.
    pub fn dispatch(&mut self, action: &Action) -> &TournamentState {
        log::debug!("Store {} applying {}", self.id, action.kind().name());
        self.warn_if_absorbed(action);

        let next = reduce(&self.state, action);
        let transition = StateTransition {
            action: action.kind(),
            from: self.state.phase(),
            to: next.phase(),
            round: next.round(),
            timestamp: Utc::now(),
        };

        if transition.opened_pairing() {
            if let Some([a, b]) = next.pair() {
                log::info!(
                    "Store {} round {}: '{}' vs '{}'",
                    self.id,
                    next.round(),
                    a,
                    b
                );
            }
        }
        if let Some(winner) = &next.winner {
            if transition.from != Phase::Concluded {
                log::info!("Store {} concluded, winner '{}'", self.id, winner);
            }
        }

        self.history = self.history.record(transition);
        self.state = next;
        &self.state
    }

    /// Decode a JSON action record and apply it.
    pub fn dispatch_json(&mut self, json: &str) -> Result<&TournamentState, DispatchError> {
        let action = Action::from_json(json).inspect_err(|e| {
            log::warn!("Store {} rejected action record: {}", self.id, e);
        })?;
        Ok(self.dispatch(&action))
    }

    fn warn_if_absorbed(&self, action: &Action) {
        if let Action::Vote { entry, voter } = action {
            match &self.state.vote {
                None => log::warn!(
                    "Store {} ignoring ballot from {} for '{}': no pairing open",
                    self.id,
                    voter,
                    entry
                ),
                Some(ballot_box) if !ballot_box.contains(entry) => log::warn!(
                    "Store {} ignoring ballot from {} for '{}': not in round {}",
                    self.id,
                    voter,
                    entry,
                    ballot_box.round
                ),
                Some(_) => {}
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
