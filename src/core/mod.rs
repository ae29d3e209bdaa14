//! Tournament state engine.
//!
//! This module contains the pure core of the bracket:
//! - Identifier newtypes for entries and voters
//! - The ballot box for the open pairing and the `vote` transition
//! - The tournament state and the `set_entries`/`next`/`restart` transitions
//! - Optional pre-validation of entry lists
//!
//! Nothing in this module performs I/O or logs. Every transition borrows its
//! input and returns a new value.

mod ids;
mod phase;
mod tournament;
mod validation;
mod vote;

pub use ids::{Entry, Voter};
pub use phase::Phase;
pub use tournament::{next, next_from_round, restart, set_entries, TournamentState};
pub use validation::{into_errors, validate_entries, EntryError, EntryValidation, MIN_ENTRIES};
pub use vote::{vote, winners, VoteState};
