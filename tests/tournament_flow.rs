//! End-to-end tournament runs driven through JSON action records.

use pairwise_bracket::core::{Entry, Phase};
use pairwise_bracket::dispatch::ActionKind;
use pairwise_bracket::store::{Store, StoreBuilder};
use serde_json::json;

fn dispatch(store: &mut Store, record: serde_json::Value) {
    store
        .dispatch_json(&record.to_string())
        .expect("record should decode");
}

#[test]
fn film_night_runs_to_a_winner() {
    let mut store = Store::new();

    dispatch(
        &mut store,
        json!({"type": "SET_ENTRIES", "entries": ["Trainspotting", "28 Days Later", "Sunshine"]}),
    );
    dispatch(&mut store, json!({"type": "NEXT"}));

    // Round 1: Trainspotting vs 28 Days Later, two to one.
    dispatch(&mut store, json!({"type": "VOTE", "entry": "Trainspotting", "voter": "ann"}));
    dispatch(&mut store, json!({"type": "VOTE", "entry": "Trainspotting", "voter": "bob"}));
    dispatch(&mut store, json!({"type": "VOTE", "entry": "28 Days Later", "voter": "cat"}));
    dispatch(&mut store, json!({"type": "NEXT"}));

    let state = store.state();
    assert_eq!(state.round(), 2);
    assert_eq!(
        state.pair(),
        Some(&[Entry::from("Sunshine"), Entry::from("Trainspotting")])
    );
    assert!(state.entries.is_empty());

    // Round 2: bob changes their mind, Sunshine wins.
    dispatch(&mut store, json!({"type": "VOTE", "entry": "Sunshine", "voter": "bob"}));
    dispatch(&mut store, json!({"type": "VOTE", "entry": "Trainspotting", "voter": "bob"}));
    dispatch(&mut store, json!({"type": "VOTE", "entry": "Sunshine", "voter": "bob"}));
    dispatch(&mut store, json!({"type": "VOTE", "entry": "Sunshine", "voter": "cat"}));
    dispatch(&mut store, json!({"type": "VOTE", "entry": "Trainspotting", "voter": "ann"}));

    let ballot_box = store.state().vote.clone().unwrap();
    assert_eq!(ballot_box.tally_for(&Entry::from("Sunshine")), 2);
    assert_eq!(ballot_box.tally_for(&Entry::from("Trainspotting")), 1);

    dispatch(&mut store, json!({"type": "NEXT"}));

    assert_eq!(
        serde_json::to_value(store.state()).unwrap(),
        json!({
            "initialEntries": ["Trainspotting", "28 Days Later", "Sunshine"],
            "winner": "Sunshine"
        })
    );
    assert_eq!(store.history().pairings_opened(), 2);
    assert_eq!(store.history().get_path().last(), Some(&Phase::Concluded));
}

#[test]
fn tied_pairs_go_to_the_back_of_the_queue() {
    let mut store = StoreBuilder::new()
        .entries(["Trainspotting", "28 Days Later", "Sunshine", "Millions", "127 Hours"])
        .auto_start(true)
        .build()
        .unwrap();

    dispatch(&mut store, json!({"type": "VOTE", "entry": "Trainspotting", "voter": "ann"}));
    dispatch(&mut store, json!({"type": "VOTE", "entry": "28 Days Later", "voter": "bob"}));
    dispatch(&mut store, json!({"type": "NEXT"}));

    let state = store.state();
    assert_eq!(state.round(), 2);
    assert_eq!(
        state.pair(),
        Some(&[Entry::from("Sunshine"), Entry::from("Millions")])
    );
    assert_eq!(
        state.entries,
        vec![
            Entry::from("127 Hours"),
            Entry::from("Trainspotting"),
            Entry::from("28 Days Later"),
        ]
    );
}

#[test]
fn ballots_for_outsiders_change_nothing() {
    let mut store = StoreBuilder::new()
        .entries(["Trainspotting", "28 Days Later", "Sunshine"])
        .auto_start(true)
        .build()
        .unwrap();
    let before = store.state().clone();

    dispatch(&mut store, json!({"type": "VOTE", "entry": "Sunshine", "voter": "ann"}));
    dispatch(&mut store, json!({"type": "VOTE", "entry": "Millions", "voter": "bob"}));

    assert_eq!(store.state(), &before);
}

#[test]
fn restart_continues_round_numbering() {
    let mut store = StoreBuilder::new()
        .entries(["Trainspotting", "28 Days Later", "Sunshine"])
        .auto_start(true)
        .build()
        .unwrap();

    dispatch(&mut store, json!({"type": "NEXT"}));
    dispatch(&mut store, json!({"type": "NEXT"}));
    assert_eq!(store.state().round(), 3);

    dispatch(&mut store, json!({"type": "RESTART"}));

    let state = store.state();
    assert_eq!(state.round(), 4);
    assert_eq!(
        state.pair(),
        Some(&[Entry::from("Trainspotting"), Entry::from("28 Days Later")])
    );
    assert_eq!(state.entries, vec![Entry::from("Sunshine")]);
    assert_eq!(
        store.history().transitions().last().map(|t| t.action),
        Some(ActionKind::Restart)
    );
}

#[test]
fn malformed_records_are_rejected_without_touching_state() {
    let mut store = StoreBuilder::new()
        .entries(["Trainspotting", "28 Days Later"])
        .auto_start(true)
        .build()
        .unwrap();
    let before = store.state().clone();
    let recorded = store.history().transitions().len();

    assert!(store.dispatch_json("not json").is_err());
    assert!(store.dispatch_json(r#"{"type":"SHUFFLE"}"#).is_err());
    assert!(store.dispatch_json(r#"{"entry":"Sunshine"}"#).is_err());

    assert_eq!(store.state(), &before);
    assert_eq!(store.history().transitions().len(), recorded);
}
