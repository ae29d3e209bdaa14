//! Optional pre-validation of entry lists.
//!
//! The transition functions accept any entry list. Callers that want
//! stronger guarantees run [`validate_entries`] first; it accumulates every
//! problem instead of stopping at the first one.

use super::ids::Entry;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Smallest pool that produces at least one pairing.
pub const MIN_ENTRIES: usize = 2;

/// Problems found in an entry list
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("At least {} entries are required (found {found})", MIN_ENTRIES)]
    TooFewEntries { found: usize },

    #[error("Entry '{entry}' appears more than once")]
    DuplicateEntry { entry: Entry },

    #[error("Entry at position {position} is blank")]
    BlankEntry { position: usize },
}

/// Result of validating an entry list
pub type EntryValidation = Validation<(), NonEmptyVec<EntryError>>;

/// Check an entry list, collecting ALL problems.
///
/// Duplicates are reported once per distinct entry.
///
/// # Example
///
/// ```rust
/// use pairwise_bracket::core::{validate_entries, Entry};
///
/// let entries = vec![Entry::from("Sunshine"), Entry::from("Millions")];
/// assert!(validate_entries(&entries).is_success());
///
/// let entries = vec![Entry::from("Sunshine")];
/// assert!(validate_entries(&entries).is_failure());
/// ```
pub fn validate_entries(entries: &[Entry]) -> EntryValidation {
    let mut checks: Vec<EntryValidation> = Vec::new();

    checks.push(if entries.len() < MIN_ENTRIES {
        Validation::fail(EntryError::TooFewEntries {
            found: entries.len(),
        })
    } else {
        Validation::success(())
    });

    for (position, entry) in entries.iter().enumerate() {
        if entry.as_str().trim().is_empty() {
            checks.push(Validation::fail(EntryError::BlankEntry { position }));
        }
    }

    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for entry in entries {
        if !seen.insert(entry) && reported.insert(entry) {
            checks.push(Validation::fail(EntryError::DuplicateEntry {
                entry: entry.clone(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a failed validation into a plain list of problems.
pub fn into_errors(validation: EntryValidation) -> Vec<EntryError> {
    match validation {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
