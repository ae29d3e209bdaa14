//! Top-level tournament state and its transitions.
//!
//! Every function here is pure: it borrows the current state and returns a
//! new one. Callers are responsible for applying transitions one at a time
//! against the authoritative state.

use super::ids::Entry;
use super::phase::Phase;
use super::vote::{winners, VoteState};
use serde::{Deserialize, Serialize};

/// The whole application state of a tournament.
///
/// `vote` and `winner` are never both present. A concluded tournament has no
/// `entries` and no `vote`; only `winner` (and `initial_entries`, if they were
/// ever set) remain.
///
/// # Example
///
/// ```rust
/// use pairwise_bracket::core::{next, set_entries, Phase, TournamentState};
///
/// let state = set_entries(&TournamentState::default(), ["Trainspotting", "28 Days Later", "Sunshine"]);
/// assert_eq!(state.phase(), Phase::Setup);
///
/// let state = next(&state);
/// assert_eq!(state.phase(), Phase::Voting);
/// assert_eq!(state.round(), 1);
/// assert_eq!(state.entries.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentState {
    /// Entries waiting to be paired, in pairing order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
    /// Entries captured by setup; the source for restarts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_entries: Vec<Entry>,
    /// Ballot box for the pair under vote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<VoteState>,
    /// The concluded tournament's winner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Entry>,
}

impl TournamentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.vote, &self.winner) {
            (_, Some(_)) => Phase::Concluded,
            (Some(_), None) => Phase::Voting,
            (None, None) => Phase::Setup,
        }
    }

    /// Round of the open pairing, or 0 when none is open.
    pub fn round(&self) -> u32 {
        self.vote.as_ref().map_or(0, |v| v.round)
    }

    pub fn pair(&self) -> Option<&[Entry; 2]> {
        self.vote.as_ref().map(|v| &v.pair)
    }
}

/// Load the entries for a new tournament.
///
/// Both `entries` and `initial_entries` become the given sequence, in order.
/// Any open pairing or declared winner is discarded: the result is a fresh
/// setup state. Nothing is validated here; see
/// [`validate_entries`](crate::core::validate_entries) for callers that need
/// stronger guarantees.
pub fn set_entries<I>(_state: &TournamentState, entries: I) -> TournamentState
where
    I: IntoIterator,
    I::Item: Into<Entry>,
{
    let list: Vec<Entry> = entries.into_iter().map(Into::into).collect();
    TournamentState {
        entries: list.clone(),
        initial_entries: list,
        ..TournamentState::default()
    }
}

/// Resolve the open pairing and open the next one.
///
/// Round numbering continues from the open pairing's round (0 if none).
pub fn next(state: &TournamentState) -> TournamentState {
    next_from_round(state, state.round())
}

/// Resolve the open pairing and open the next one as round `round + 1`.
///
/// Winners of the open pairing are appended to the back of the pool so that
/// entries already queued are paired before carried-over winners. A pool of
/// exactly one entry concludes the tournament. An empty pool clears `entries`
/// and `vote` without declaring a winner.
pub fn next_from_round(state: &TournamentState, round: u32) -> TournamentState {
    let mut pool = state.entries.clone();
    pool.extend(winners(state.vote.as_ref()));

    match pool.as_slice() {
        [] => TournamentState {
            entries: Vec::new(),
            vote: None,
            ..state.clone()
        },
        [sole] => TournamentState {
            entries: Vec::new(),
            vote: None,
            winner: Some(sole.clone()),
            ..state.clone()
        },
        [first, second, rest @ ..] => TournamentState {
            vote: Some(VoteState::new([first.clone(), second.clone()], round + 1)),
            entries: rest.to_vec(),
            winner: None,
            ..state.clone()
        },
    }
}

/// Rebuild the bracket from `initial_entries` and open its first pairing.
///
/// The round counter continues from the open pairing's round, or starts at
/// round 1 when no pairing is open (for example after a winner was declared).
pub fn restart(state: &TournamentState) -> TournamentState {
    let round = state.round();
    let reset = TournamentState {
        entries: state.initial_entries.clone(),
        vote: None,
        winner: None,
        ..state.clone()
    };
    next_from_round(&reset, round)
}
