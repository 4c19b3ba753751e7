//! Whole-match integration tests.

mod common;

use std::time::Duration;

use common::{init_logging, play_out, step};
use tierstack::{
    Color, CoordinatorBuilder, GameConfig, GameEvent, ManualClock, Phase, PlayRejection, Side, TurnCoordinator,
};

fn seeded(seed: u64) -> TurnCoordinator {
    CoordinatorBuilder::new().seed(seed).build().unwrap()
}

// =============================================================================
// Full Matches
// =============================================================================

#[test]
fn test_matches_finish_with_a_winner() {
    init_logging();

    for seed in 0..20 {
        let mut game = seeded(seed);
        play_out(&mut game, 10_000);

        let winner = game.winner().expect("match should finish");
        let threshold = game.config().coins_to_win;
        assert!(game.scores().coins(winner) >= threshold, "seed {seed}");
        assert!(game.scores().coins(winner.opponent()) < threshold, "seed {seed}");
    }
}

#[test]
fn test_settlements_add_up_to_scores() {
    let mut game = seeded(7);
    let events = play_out(&mut game, 10_000);

    for side in Side::ALL {
        let earned: u32 = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::RoundSettled { winner, coins_gained } if *winner == side => Some(*coins_gained),
                _ => None,
            })
            .sum();
        assert_eq!(earned, game.scores().coins(side));
    }
}

#[test]
fn test_game_over_is_the_last_event() {
    let mut game = seeded(21);
    let events = play_out(&mut game, 10_000);

    let winner = game.winner().unwrap();
    assert_eq!(events.last(), Some(&GameEvent::GameOver { winner }));
    assert_eq!(
        events.iter().filter(|e| matches!(e, GameEvent::GameOver { .. })).count(),
        1
    );
}

#[test]
fn test_loser_starts_next_round() {
    let mut game = seeded(3);
    let events = play_out(&mut game, 10_000);

    let mut last_winner = None;
    for event in &events {
        match event {
            GameEvent::RoundSettled { winner, .. } => last_winner = Some(*winner),
            GameEvent::RoundStarted { round, starter } if *round > 1 => {
                assert_eq!(Some(starter.opponent()), last_winner);
            }
            _ => {}
        }
    }
}

#[test]
fn test_each_round_draws_one_card_per_side() {
    let mut game = seeded(5);
    let events = play_out(&mut game, 10_000);

    let starts = events
        .iter()
        .enumerate()
        .filter(|(_, e)| matches!(e, GameEvent::RoundStarted { round, .. } if *round > 1));

    for (i, _) in starts {
        assert_eq!(events[i + 1], GameEvent::CardsDrawn { side: Side::Player, count: 1 });
        assert_eq!(events[i + 2], GameEvent::CardsDrawn { side: Side::Ai, count: 1 });
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_replays_identically() {
    let mut a = seeded(1234);
    let mut b = seeded(1234);

    assert_eq!(play_out(&mut a, 10_000), play_out(&mut b, 10_000));
    assert_eq!(a.winner(), b.winner());
}

#[test]
fn test_different_seeds_deal_differently() {
    let a = seeded(1);
    let b = seeded(2);

    let colors = |game: &TurnCoordinator| -> Vec<Color> {
        game.hand(Side::Player).iter().map(|c| c.color()).collect()
    };
    let deck_order = |game: &TurnCoordinator| -> Vec<Color> {
        game.deck().draw_pile().iter().map(|c| c.color()).collect()
    };
    assert!(colors(&a) != colors(&b) || deck_order(&a) != deck_order(&b));
}

// =============================================================================
// Starvation and Timing
// =============================================================================

#[test]
fn test_tiny_deck_starves_gracefully() {
    init_logging();

    let mut game = CoordinatorBuilder::new()
        .seed(9)
        .stacked_deck(vec![Color::Red, Color::Orange, Color::Black])
        .build()
        .unwrap();

    let events: Vec<_> = game.drain_events().collect();
    assert_eq!(events[1], GameEvent::CardsDrawn { side: Side::Player, count: 3 });
    assert_eq!(events[2], GameEvent::CardsDrawn { side: Side::Ai, count: 0 });
    assert_eq!(events[3], GameEvent::CardsDrawn { side: Side::Player, count: 0 });
    assert_eq!(events[4], GameEvent::CardsDrawn { side: Side::Ai, count: 0 });
    assert!(game.deck().is_exhausted());

    // The player opens with Red and the empty-handed AI has to pass.
    step(&mut game);
    step(&mut game);
    assert_eq!(game.scores().coins(Side::Player), 1);
    assert_eq!(game.round().number(), 2);
    assert_eq!(game.round().starter(), Side::Ai);

    // Round two's draw recycles the Red from the discard pile.
    assert_eq!(game.hand(Side::Player).len(), 3);
    assert!(game.hand(Side::Ai).is_empty());
    assert!(game.deck().is_exhausted());
    assert_eq!(game.population(), 3);
}

#[test]
fn test_ai_waits_for_its_delay() {
    let clock = ManualClock::new();
    let mut game = CoordinatorBuilder::new()
        .config(GameConfig::default().with_first_starter(Side::Ai))
        .seed(17)
        .clock(clock.clone())
        .build()
        .unwrap();

    clock.advance(Duration::from_millis(599));
    assert!(!game.poll());
    assert_eq!(game.phase(), Phase::Acting(Side::Ai));

    clock.advance(Duration::from_millis(1));
    assert!(game.poll());
    assert_eq!(game.phase(), Phase::Acting(Side::Player));
    assert_eq!(game.table().len(), 1);
}

#[test]
fn test_timer_is_inert_after_game_over() {
    let clock = ManualClock::new();
    let mut game = CoordinatorBuilder::new()
        .config(GameConfig::default().with_coins_to_win(1))
        .seed(4)
        .clock(clock.clone())
        .build()
        .unwrap();

    let card = common::first_legal(&game).unwrap();
    game.attempt_play(Side::Player, card).unwrap();
    assert!(game.pending_ai_turn().is_some());

    // The host resolves the AI side before its delay elapses.
    game.pass(Side::Ai).unwrap();
    assert_eq!(game.winner(), Some(Side::Player));

    clock.advance(Duration::from_secs(5));
    assert!(!game.poll());
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.attempt_play(Side::Player, card), Err(PlayRejection::GameOver));
}
