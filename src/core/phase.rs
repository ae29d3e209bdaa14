//! Coarse lifecycle position of a tournament.

use serde::{Deserialize, Serialize};

/// Where a [`TournamentState`](crate::core::TournamentState) sits in its
/// lifecycle.
///
/// The phase is derived from which optional fields are present; it is never
/// stored. `Setup` also covers a state whose pool collapsed without producing
/// a winner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Entries loaded, no pairing open yet
    Setup,
    /// A pair is under vote
    Voting,
    /// A winner has been declared
    Concluded,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Voting => "Voting",
            Self::Concluded => "Concluded",
        }
    }

    /// Check if this is the terminal phase.
    ///
    /// A concluded tournament only moves again through a restart.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Concluded)
    }
}
