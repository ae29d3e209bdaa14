//! The ballot box for a single pairing.
//!
//! A [`VoteState`] only exists nested inside a
//! [`TournamentState`](crate::core::TournamentState) while a round is open.
//! Casting a ballot is a pure function returning a new vote state.

use super::ids::{Entry, Voter};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Votes collected for the pair currently under consideration.
///
/// `tally` is a cache kept consistent with `votes` by [`vote`]; it is never
/// recomputed on read. A tally key stays in the map (possibly at zero) once the
/// entry has received a ballot, even if that ballot is later retracted.
///
/// # Example
///
/// ```rust
/// use pairwise_bracket::core::{vote, Entry, VoteState, Voter};
///
/// let ballot_box = VoteState::new([Entry::from("Trainspotting"), Entry::from("Sunshine")], 1);
/// let ballot_box = vote(&ballot_box, &Entry::from("Sunshine"), &Voter::from("voter1"));
///
/// assert_eq!(ballot_box.tally_for(&Entry::from("Sunshine")), 1);
/// assert_eq!(ballot_box.leader(), Some(&Entry::from("Sunshine")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteState {
    /// The two entries being voted on
    pub pair: [Entry; 2],
    /// Pairing counter, starting at 1
    pub round: u32,
    /// Entry -> number of voters currently backing it
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tally: BTreeMap<Entry, u32>,
    /// Voter -> the entry they currently back
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub votes: BTreeMap<Voter, Entry>,
}

impl VoteState {
    /// Open a ballot box with no votes cast.
    pub fn new(pair: [Entry; 2], round: u32) -> Self {
        Self {
            pair,
            round,
            tally: BTreeMap::new(),
            votes: BTreeMap::new(),
        }
    }

    /// Whether `entry` is one of the two entries under vote.
    pub fn contains(&self, entry: &Entry) -> bool {
        self.pair.contains(entry)
    }

    /// Current count for `entry`, zero if it has no ballots.
    pub fn tally_for(&self, entry: &Entry) -> u32 {
        self.tally.get(entry).copied().unwrap_or(0)
    }

    /// Number of ballots currently cast.
    pub fn total_votes(&self) -> usize {
        self.votes.len()
    }

    /// The entry currently ahead, or `None` while the pair is tied.
    pub fn leader(&self) -> Option<&Entry> {
        let [a, b] = &self.pair;
        match self.tally_for(a).cmp(&self.tally_for(b)) {
            Ordering::Greater => Some(a),
            Ordering::Less => Some(b),
            Ordering::Equal => None,
        }
    }
}

/// Cast a ballot for `entry` on behalf of `voter`.
///
/// A ballot for an entry outside the pair is absorbed: the input is returned
/// unchanged. Otherwise the voter's previous ballot (if any) is retracted
/// before the new one is counted, so each voter backs at most one entry.
/// Re-voting for the same entry retracts and re-casts, leaving the count where
/// it was.
pub fn vote(vote_state: &VoteState, entry: &Entry, voter: &Voter) -> VoteState {
    if !vote_state.contains(entry) {
        return vote_state.clone();
    }

    let retracted = nullify(vote_state.clone(), voter);
    let recorded = record(retracted, entry, voter);
    increment(recorded, entry)
}

fn nullify(mut vote_state: VoteState, voter: &Voter) -> VoteState {
    if let Some(previous) = vote_state.votes.remove(voter) {
        let count = vote_state.tally.entry(previous).or_insert(0);
        *count = count.saturating_sub(1);
    }
    vote_state
}

fn record(mut vote_state: VoteState, entry: &Entry, voter: &Voter) -> VoteState {
    vote_state.votes.insert(voter.clone(), entry.clone());
    vote_state
}

fn increment(mut vote_state: VoteState, entry: &Entry) -> VoteState {
    *vote_state.tally.entry(entry.clone()).or_insert(0) += 1;
    vote_state
}

/// Entries advancing out of the current pairing.
///
/// With no round open nobody advances. A strictly higher tally advances a
/// single entry; an equal tally (including no votes at all) advances both, in
/// pair order.
pub fn winners(vote_state: Option<&VoteState>) -> Vec<Entry> {
    vote_state.map(winners_of).unwrap_or_default()
}

fn winners_of(vote_state: &VoteState) -> Vec<Entry> {
    let [a, b] = &vote_state.pair;
    let a_votes = vote_state.tally_for(a);
    let b_votes = vote_state.tally_for(b);

    match a_votes.cmp(&b_votes) {
        Ordering::Greater => vec![a.clone()],
        Ordering::Less => vec![b.clone()],
        Ordering::Equal => vec![a.clone(), b.clone()],
    }
}
