//! Pairwise Bracket: a pure state engine for pairwise voting tournaments
//!
//! A list of entries is reduced two at a time: each round puts a pair under
//! vote, the entry with more ballots goes to the back of the queue (both go
//! on a tie), and the last entry standing wins.
//!
//! The crate follows a "pure core, imperative shell" layout:
//!
//! - [`core`]: value types and pure transitions (`set_entries`, `next`,
//!   `vote`, `restart`)
//! - [`dispatch`]: action records and the reducer routing them to transitions
//! - [`store`]: an owned state handle that applies actions one at a time,
//!   logs them and keeps a history
//!
//! # Example
//!
//! ```rust
//! use pairwise_bracket::core::Entry;
//! use pairwise_bracket::dispatch::Action;
//! use pairwise_bracket::store::Store;
//!
//! let mut store = Store::new();
//! store.dispatch(&Action::set_entries(["Trainspotting", "28 Days Later"]));
//! store.dispatch(&Action::Next);
//! store.dispatch(&Action::vote_as("28 Days Later", "voter1"));
//! let state = store.dispatch(&Action::Next);
//!
//! assert_eq!(state.winner, Some(Entry::from("28 Days Later")));
//! ```

pub mod core;
pub mod dispatch;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Entry, Phase, TournamentState, VoteState, Voter};
pub use crate::dispatch::{Action, DispatchError};
pub use crate::store::{BuildError, Store, StoreBuilder};
