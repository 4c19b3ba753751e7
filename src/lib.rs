//! # tierstack
//!
//! Rule engine for a two-player tier-succession card game.
//!
//! ## The Game
//!
//! Each card has a tier (1, 2, Black, White) and a color. A round starts
//! on an empty table; the sides alternate placing cards, each of which
//! must succeed the table top (1 → 2 → Black → White → 1, with tier-2
//! colors constrained by the tier-1 color beneath them). Two tier-1
//! primaries fuse into a tier-2 secondary; two different secondaries fuse
//! into Black. A side that cannot or will not play passes, and the other
//! side wins the round, taking coins equal to the top card's value. The
//! first side to reach the coin threshold wins the match.
//!
//! ## Design Principles
//!
//! 1. **One mutator**: `TurnCoordinator` owns every card container. Hosts
//!    submit intents and drain events; nothing else changes state.
//!
//! 2. **Conservation**: cards move between containers by value. Fused
//!    cards carry their inputs, so the leaf-card count never changes.
//!
//! 3. **Deterministic**: a seed and a sequence of intents replay the same
//!    match, event for event.
//!
//! ## Modules
//!
//! - `core`: sides, card ids, RNG, configuration, actions, errors
//! - `cards`: tiers, colors, templates, instances, catalog
//! - `zones`: deck, hands, table
//! - `rules`: succession check and combine recipes
//! - `ai`: the AI strategy seam and built-in heuristic
//! - `game`: turn coordinator, builder, events, AI timer

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardUid, Side, SideMap,
    GameRng, GameRngState,
    GameConfig, DeckComposition, TierValues,
    Action, ActionRecord,
    PlayRejection, CombineRejection, PassRejection, ConfigError, InvariantViolation,
};

pub use crate::cards::{CardCatalog, CardInstance, CardTemplate, Color, Tier};

pub use crate::zones::{Deck, Hand, TableStack};

pub use crate::rules::{can_play_after, resolve_combination, CombineError, Forge};

pub use crate::ai::{HeuristicStrategy, Strategy};

pub use crate::game::{
    CoordinatorBuilder, TurnCoordinator,
    Phase, RoundState, SideStatus, ScoreBoard,
    GameEvent, EventBus,
    Clock, SystemClock, ManualClock, ThinkTimer,
};
