//! Builder for configuring a store.

use crate::core::{into_errors, validate_entries, Entry};
use crate::dispatch::Action;
use crate::store::error::BuildError;
use crate::store::history::StateHistory;
use crate::store::Store;
use uuid::Uuid;

/// Builder for constructing a [`Store`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use pairwise_bracket::store::StoreBuilder;
///
/// let store = StoreBuilder::new()
///     .entries(["Trainspotting", "28 Days Later", "Sunshine"])
///     .auto_start(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(store.state().round(), 1);
/// ```
pub struct StoreBuilder {
    id: Option<Uuid>,
    entries: Option<Vec<Entry>>,
    strict: bool,
    auto_start: bool,
    history_limit: Option<usize>,
}

impl StoreBuilder {
    /// Create a new builder.
    ///
    /// Strict validation is on; auto start is off; history is unbounded.
    pub fn new() -> Self {
        Self {
            id: None,
            entries: None,
            strict: true,
            auto_start: false,
            history_limit: None,
        }
    }

    /// Use a fixed store id instead of a random one.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Entries to load when the store is built.
    pub fn entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        self.entries = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Reject entry lists with fewer than two, blank or duplicate entries.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Open the first pairing right after loading entries.
    pub fn auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    /// Retain at most `limit` history records.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the store.
    /// Returns an error if the configuration is inconsistent or the entries
    /// fail strict validation.
    pub fn build(self) -> Result<Store, BuildError> {
        if self.auto_start && self.entries.is_none() {
            return Err(BuildError::MissingEntries);
        }

        if self.strict {
            if let Some(entries) = &self.entries {
                let errors = into_errors(validate_entries(entries));
                if !errors.is_empty() {
                    return Err(BuildError::InvalidEntries(errors));
                }
            }
        }

        let history = match self.history_limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        let mut store = Store::with_parts(self.id.unwrap_or_else(Uuid::new_v4), history);

        if let Some(entries) = self.entries {
            store.dispatch(&Action::SetEntries { entries });
            if self.auto_start {
                store.dispatch(&Action::Next);
            }
        }

        Ok(store)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntryError, Phase};

    #[test]
    fn builds_empty_store() {
        let store = StoreBuilder::new().build().unwrap();
        assert_eq!(store.state().phase(), Phase::Setup);
        assert!(store.history().transitions().is_empty());
    }

    #[test]
    fn loads_entries_without_starting() {
        let store = StoreBuilder::new()
            .entries(["Trainspotting", "28 Days Later"])
            .build()
            .unwrap();

        assert_eq!(store.state().entries.len(), 2);
        assert_eq!(store.state().phase(), Phase::Setup);
        assert_eq!(store.history().transitions().len(), 1);
    }

    #[test]
    fn auto_start_opens_round_one() {
        let store = StoreBuilder::new()
            .entries(["Trainspotting", "28 Days Later", "Sunshine"])
            .auto_start(true)
            .build()
            .unwrap();

        assert_eq!(store.state().phase(), Phase::Voting);
        assert_eq!(store.state().round(), 1);
        assert_eq!(store.history().pairings_opened(), 1);
    }

    #[test]
    fn auto_start_requires_entries() {
        let result = StoreBuilder::new().auto_start(true).build();
        assert!(matches!(result, Err(BuildError::MissingEntries)));
    }

    #[test]
    fn strict_mode_rejects_bad_entries() {
        let result = StoreBuilder::new().entries(["Solo"]).build();
        match result {
            Err(BuildError::InvalidEntries(errors)) => {
                assert_eq!(errors, vec![EntryError::TooFewEntries { found: 1 }]);
            }
            Err(other) => panic!("Expected InvalidEntries, got {:?}", other),
            Ok(_) => panic!("Expected InvalidEntries, got a store"),
        }
    }

    #[test]
    fn lenient_mode_accepts_single_entry() {
        let store = StoreBuilder::new()
            .entries(["Solo"])
            .strict(false)
            .auto_start(true)
            .build()
            .unwrap();

        assert_eq!(store.state().winner, Some(Entry::from("Solo")));
    }

    #[test]
    fn fixed_id_is_kept() {
        let id = Uuid::new_v4();
        let store = StoreBuilder::new().id(id).build().unwrap();
        assert_eq!(store.id(), id);
    }

    #[test]
    fn history_limit_is_applied() {
        let store = StoreBuilder::new()
            .entries(["A", "B"])
            .auto_start(true)
            .history_limit(1)
            .build()
            .unwrap();

        assert_eq!(store.history().transitions().len(), 1);
        assert_eq!(store.history().limit(), Some(1));
    }

    #[test]
    fn invalid_entries_message_lists_every_problem() {
        let err = StoreBuilder::new()
            .entries(["A", "A", " "])
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid entries: Entry at position 2 is blank; Entry 'A' appears more than once"
        );
    }
}
