//! Computer opponents.
//!
//! A strategy sees its own hand, the table top, and a [`Forge`] for
//! fusing cards. It either hands back the card to place on the table or
//! passes by returning `None`. Everything the strategy removes from the
//! hand must be accounted for in what it returns; the coordinator checks
//! card population after every AI turn.

pub mod heuristic;

pub use heuristic::HeuristicStrategy;

use crate::cards::{CardInstance, CardTemplate};
use crate::rules::Forge;
use crate::zones::Hand;

/// Decision-making for the AI side.
pub trait Strategy: Send + Sync {
    /// Choose a play against `table_top`.
    ///
    /// Returns the card to place, already removed from `hand` (or fused
    /// from hand cards via `forge`), or `None` to pass. The returned card
    /// must be legal after `table_top`.
    fn decide_play(
        &self,
        hand: &mut Hand,
        table_top: Option<&CardTemplate>,
        forge: &mut Forge<'_>,
    ) -> Option<CardInstance>;
}
