//! Shared helpers for integration tests.

#![allow(dead_code)]

use tierstack::{can_play_after, CardUid, GameEvent, Side, TurnCoordinator};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test-captured subscriber. `TEST_LOG` or `RUST_LOG` picks the
/// level; the default is quiet.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// First card in the player's hand that may follow the table top.
pub fn first_legal(game: &TurnCoordinator) -> Option<CardUid> {
    let top = game.table().top_template();
    game.hand(Side::Player)
        .iter()
        .find(|card| can_play_after(top, card.template()))
        .map(|card| card.uid())
}

/// Advance one step: the player plays its first legal card or passes, or
/// the AI's pending turn is fired.
pub fn step(game: &mut TurnCoordinator) {
    match game.current_actor() {
        Some(Side::Player) => match first_legal(game) {
            Some(uid) => game.attempt_play(Side::Player, uid).unwrap(),
            None => game.pass(Side::Player).unwrap(),
        },
        Some(Side::Ai) => {
            let due = game.pending_ai_turn().expect("AI turn armed").due_at;
            assert!(game.tick(due));
        }
        None => {}
    }
}

/// Play until game over or `max_steps`, checking conservation after every
/// step. Returns every event emitted, in order.
pub fn play_out(game: &mut TurnCoordinator, max_steps: usize) -> Vec<GameEvent> {
    let mut events: Vec<GameEvent> = game.drain_events().collect();
    for _ in 0..max_steps {
        if game.is_over() {
            break;
        }
        step(game);
        assert_eq!(game.population(), game.card_total());
        events.extend(game.drain_events());
    }
    events
}
