//! Action records and the reducer that routes them.
//!
//! The reducer is the glue between external action records and the pure
//! transitions in [`crate::core`]. It is itself pure; owning the state and
//! applying actions one at a time is the job of [`crate::store::Store`].

mod action;
mod reducer;

pub use action::{Action, ActionKind, DispatchError};
pub use reducer::{reduce, reduce_all};
