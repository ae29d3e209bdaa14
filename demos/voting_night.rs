//! Voting Night
//!
//! This example runs a small film-night bracket through a store.
//!
//! Key concepts:
//! - Configuring a store with the builder (strict validation, auto start)
//! - Feeding JSON action records the way a transport layer would
//! - Tie handling: both tied entries go to the back of the queue
//! - Restarting a concluded tournament from its initial entries
//!
//! Run with: cargo run --example voting_night

use pairwise_bracket::core::{Phase, TournamentState};
use pairwise_bracket::store::{Store, StoreBuilder};
use serde_json::json;

fn print_state(label: &str, state: &TournamentState) {
    match state.phase() {
        Phase::Voting => {
            if let (Some([a, b]), Some(ballot_box)) = (state.pair(), &state.vote) {
                println!(
                    "  [{}] round {}: {} ({}) vs {} ({}), queued: {:?}",
                    label,
                    ballot_box.round,
                    a,
                    ballot_box.tally_for(a),
                    b,
                    ballot_box.tally_for(b),
                    state.entries.iter().map(|e| e.as_str()).collect::<Vec<_>>()
                );
            }
        }
        Phase::Concluded => {
            if let Some(winner) = &state.winner {
                println!("  [{}] winner: {}", label, winner);
            }
        }
        Phase::Setup => println!("  [{}] waiting for entries", label),
    }
}

fn send(store: &mut Store, record: serde_json::Value) {
    match store.dispatch_json(&record.to_string()) {
        Ok(state) => print_state(record["type"].as_str().unwrap_or("?"), state),
        Err(e) => println!("  rejected {}: {}", record, e),
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("=== Voting Night ===\n");

    println!("Rejected configuration:");
    match StoreBuilder::new().entries(["Sunshine", "Sunshine"]).build() {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  {}", e),
    }

    let mut store = match StoreBuilder::new()
        .entries(["Trainspotting", "28 Days Later", "Sunshine", "Millions"])
        .auto_start(true)
        .build()
    {
        Ok(store) => store,
        Err(e) => {
            eprintln!("could not configure store: {}", e);
            return;
        }
    };

    println!("\nStore {}", store.id());
    print_state("start", store.state());

    println!("\nRound 1 ends in a tie:");
    send(&mut store, json!({"type": "VOTE", "entry": "Trainspotting", "voter": "ann"}));
    send(&mut store, json!({"type": "VOTE", "entry": "28 Days Later", "voter": "bob"}));
    send(&mut store, json!({"type": "NEXT"}));

    println!("\nRounds 2 onward are decisive:");
    while store.state().phase() == Phase::Voting {
        let favourite = match store.state().pair() {
            Some([_, b]) => b.clone(),
            None => break,
        };
        send(&mut store, json!({"type": "VOTE", "entry": favourite, "voter": "ann"}));
        send(&mut store, json!({"type": "NEXT"}));
    }

    println!("\nA stray record and a restart:");
    send(&mut store, json!({"type": "SHUFFLE"}));
    send(&mut store, json!({"type": "RESTART"}));

    let history = store.history();
    println!(
        "\n{} actions applied, {} pairings opened",
        history.transitions().len(),
        history.pairings_opened()
    );
    println!(
        "Phase path: {}",
        history
            .get_path()
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(" -> ")
    );
}
