//! Newtype wrappers for tournament identifiers.
//!
//! Entries and voters are both plain strings on the wire, but mixing them up
//! silently corrupts a tally, so each gets its own type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate taking part in the tournament.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(pub String);

impl Entry {
    pub fn new(s: impl Into<String>) -> Self {
        Entry(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry(s)
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry(s.to_string())
    }
}

/// Someone casting ballots.
///
/// The default voter is the anonymous one. All anonymous ballots share a
/// single slot in [`VoteState::votes`](crate::core::VoteState), so an
/// anonymous re-vote replaces the previous anonymous ballot.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Voter(pub String);

impl Voter {
    pub fn new(s: impl Into<String>) -> Self {
        Voter(s.into())
    }

    /// The shared slot used when a ballot arrives without a voter.
    pub fn anonymous() -> Self {
        Voter::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Voter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_anonymous() {
            write!(f, "<anonymous>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<String> for Voter {
    fn from(s: String) -> Self {
        Voter(s)
    }
}

impl From<&str> for Voter {
    fn from(s: &str) -> Self {
        Voter(s.to_string())
    }
}
