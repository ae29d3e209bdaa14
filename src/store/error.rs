//! Build errors for the store builder.

use crate::core::EntryError;
use thiserror::Error;

/// Errors that can occur when building a [`Store`](crate::store::Store).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Entries not specified. Call .entries(list) before .auto_start(true)")]
    MissingEntries,

    #[error("Invalid entries: {}", describe(.0))]
    InvalidEntries(Vec<EntryError>),
}

fn describe(errors: &[EntryError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
