//! Routes actions to the matching transition.

use super::action::Action;
use crate::core::{self, TournamentState};

/// Apply one action to the tournament state.
///
/// A ballot cast while no pairing is open leaves the state unchanged, as does
/// a ballot for an entry outside the open pair.
pub fn reduce(state: &TournamentState, action: &Action) -> TournamentState {
    match action {
        Action::SetEntries { entries } => core::set_entries(state, entries.iter().cloned()),
        Action::Next => core::next(state),
        Action::Vote { entry, voter } => match &state.vote {
            Some(ballot_box) => TournamentState {
                vote: Some(core::vote(ballot_box, entry, voter)),
                ..state.clone()
            },
            None => state.clone(),
        },
        Action::Restart => core::restart(state),
    }
}

/// Apply a sequence of actions in order, starting from `state`.
pub fn reduce_all<'a, I>(state: &TournamentState, actions: I) -> TournamentState
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(state.clone(), |acc, action| reduce(&acc, action))
}
