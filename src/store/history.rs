//! Dispatch history tracking.
//!
//! Provides immutable tracking of the actions a [`Store`](crate::store::Store)
//! has applied, following the same value semantics as the tournament state.

use crate::core::Phase;
use crate::dispatch::ActionKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched action.
///
/// # Example
///
/// ```rust
/// use pairwise_bracket::core::Phase;
/// use pairwise_bracket::dispatch::ActionKind;
/// use pairwise_bracket::store::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     action: ActionKind::Next,
///     from: Phase::Setup,
///     to: Phase::Voting,
///     round: 1,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.opened_pairing());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The action that was applied
    pub action: ActionKind,
    /// Phase before the action
    pub from: Phase,
    /// Phase after the action
    pub to: Phase,
    /// Round of the open pairing after the action (0 if none)
    pub round: u32,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// Whether this action opened a new pairing.
    pub fn opened_pairing(&self) -> bool {
        matches!(self.action, ActionKind::Next | ActionKind::Restart) && self.to == Phase::Voting
    }
}

/// Ordered history of dispatched actions.
///
/// History is immutable - `record` returns a new history with the transition
/// added. When a limit is set, the oldest records are dropped first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl StateHistory {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history retaining at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// ```rust
    /// use pairwise_bracket::core::Phase;
    /// use pairwise_bracket::dispatch::ActionKind;
    /// use pairwise_bracket::store::{StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     action: ActionKind::SetEntries,
    ///     from: Phase::Setup,
    ///     to: Phase::Setup,
    ///     round: 0,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(new_history.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = transitions.len().saturating_sub(limit);
            transitions.drain(..excess);
        }
        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// Get the path of phases traversed.
    ///
    /// Returns the first record's `from` phase, then the `to` phase of each
    /// record.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last retained records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of pairings opened among the retained records.
    pub fn pairings_opened(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.opened_pairing())
            .count()
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
