//! Action records accepted by the dispatcher.

use crate::core::{Entry, Voter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning an external record into an [`Action`]
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Malformed action record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A request to change the tournament state.
///
/// On the wire an action is a JSON object tagged by `type`:
///
/// ```rust
/// use pairwise_bracket::dispatch::Action;
///
/// let action = Action::from_json(r#"{"type": "VOTE", "entry": "Sunshine"}"#).unwrap();
/// assert_eq!(action, Action::vote("Sunshine"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Load the entries for a new tournament
    SetEntries { entries: Vec<Entry> },

    /// Resolve the open pairing and open the next one
    Next,

    /// Cast a ballot in the open pairing
    Vote {
        entry: Entry,
        /// Missing voters share the anonymous slot
        #[serde(default, skip_serializing_if = "Voter::is_anonymous")]
        voter: Voter,
    },

    /// Rebuild the bracket from the initial entries
    Restart,
}

/// Discriminant of an [`Action`], used in history records and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    SetEntries,
    Next,
    Vote,
    Restart,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetEntries => "SET_ENTRIES",
            Self::Next => "NEXT",
            Self::Vote => "VOTE",
            Self::Restart => "RESTART",
        }
    }
}

impl Action {
    pub fn set_entries<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        Action::SetEntries {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// An anonymous ballot.
    pub fn vote(entry: impl Into<Entry>) -> Self {
        Action::Vote {
            entry: entry.into(),
            voter: Voter::anonymous(),
        }
    }

    pub fn vote_as(entry: impl Into<Entry>, voter: impl Into<Voter>) -> Self {
        Action::Vote {
            entry: entry.into(),
            voter: voter.into(),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SetEntries { .. } => ActionKind::SetEntries,
            Action::Next => ActionKind::Next,
            Action::Vote { .. } => ActionKind::Vote,
            Action::Restart => ActionKind::Restart,
        }
    }

    /// Decode an action from its JSON text form.
    pub fn from_json(json: &str) -> Result<Self, DispatchError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode an action from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DispatchError> {
        Ok(serde_json::from_value(value)?)
    }
}
