//! Error types.
//!
//! Three kinds of failure exist:
//! - **Rejected intents** (`PlayRejection`, `CombineRejection`,
//!   `PassRejection`): returned to the caller, state unchanged.
//! - **Configuration errors** (`ConfigError`): returned while building a match.
//! - **Invariant violations** (`InvariantViolation`): logic bugs. These are
//!   never returned; the coordinator panics with them.
//!
//! Passing and drawing from an exhausted deck are ordinary results, not errors.

use thiserror::Error;

use super::entity::CardUid;
use super::player::Side;
use crate::cards::{Color, Tier};
use crate::rules::CombineError;

/// Why a configuration or catalog cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("coins_to_win must be at least 1")]
    ZeroCoinsToWin,
    #[error("deck composition contains no cards")]
    EmptyDeck,
    #[error("color {color:?} cannot appear at tier {tier}")]
    TierColorMismatch { tier: Tier, color: Color },
    #[error("catalog defines color {0:?} twice")]
    DuplicateColor(Color),
    #[error("catalog has no template for color {0:?}")]
    MissingColor(Color),
}

/// Why a play intent was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayRejection {
    #[error("it is not this side's turn")]
    NotYourTurn,
    #[error("the match is over")]
    GameOver,
    #[error("card cannot follow the current table top")]
    IllegalSequence,
    #[error("card is not in this side's hand")]
    CardNotInHand,
}

/// Why a combine intent was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CombineRejection {
    #[error("cards are of different tiers")]
    TierMismatch,
    #[error("card colors do not combine")]
    ColorMismatch,
    #[error("tier {0} cards cannot be combined")]
    NoRecipe(Tier),
    #[error("card is not in this side's hand")]
    CardNotInHand,
    #[error("it is not this side's turn")]
    NotYourTurn,
    #[error("the match is over")]
    GameOver,
}

impl From<CombineError> for CombineRejection {
    fn from(err: CombineError) -> Self {
        match err {
            CombineError::TierMismatch => CombineRejection::TierMismatch,
            CombineError::ColorMismatch => CombineRejection::ColorMismatch,
            CombineError::NoRecipe(tier) => CombineRejection::NoRecipe(tier),
        }
    }
}

/// Why a pass intent was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PassRejection {
    #[error("it is not this side's turn")]
    NotYourTurn,
    #[error("the match is over")]
    GameOver,
}

/// Internal-consistency failures. Reaching one of these is a bug.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("both sides left round {round}")]
    BothSidesInactive { round: u32 },
    #[error("card population is {actual}, expected {expected}")]
    PopulationMismatch { expected: usize, actual: usize },
    #[error("{side} produced {card} which cannot follow the table top")]
    IllegalStrategyPlay { side: Side, card: CardUid },
}
