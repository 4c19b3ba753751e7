//! Core engine types: sides, card ids, RNG, configuration, actions, errors.
//!
//! This module holds the building blocks every other module leans on.
//! Nothing here knows about turn order or card rules.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::{CardUid, UidAllocator};
pub use player::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{DeckComposition, GameConfig, TierValues};
pub use action::{Action, ActionRecord};
pub use error::{CombineRejection, ConfigError, InvariantViolation, PassRejection, PlayRejection};
