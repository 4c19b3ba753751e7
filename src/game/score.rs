//! Coin totals and the win threshold.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Cumulative coins per side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    coins: SideMap<u32>,
    coins_to_win: u32,
}

impl ScoreBoard {
    #[must_use]
    pub fn new(coins_to_win: u32) -> Self {
        Self {
            coins: SideMap::with_value(0),
            coins_to_win,
        }
    }

    /// Add coins to one side; returns its new total.
    pub fn award(&mut self, side: Side, coins: u32) -> u32 {
        let total = &mut self.coins[side];
        *total = total.saturating_add(coins);
        *total
    }

    #[must_use]
    pub fn coins(&self, side: Side) -> u32 {
        self.coins[side]
    }

    #[must_use]
    pub fn coins_to_win(&self) -> u32 {
        self.coins_to_win
    }

    /// Has `side` reached the threshold?
    #[must_use]
    pub fn has_won(&self, side: Side) -> bool {
        self.coins[side] >= self.coins_to_win
    }

    /// The side at or past the threshold, if any.
    ///
    /// Only one side gains coins per settlement, so at most one side can
    /// cross the threshold at a time. `Player` is checked first.
    #[must_use]
    pub fn leader_at_threshold(&self) -> Option<Side> {
        Side::ALL.into_iter().find(|&side| self.has_won(side))
    }
}
