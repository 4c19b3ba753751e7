//! Match configuration.
//!
//! The presentation layer resolves these numbers once (from assets,
//! a settings file, or defaults) and hands them to the coordinator:
//! - `DeckComposition`: how many copies of each color make up the deck
//! - `TierValues`: coin value of a card at each tier
//! - `GameConfig`: combines the above with win condition and timing
//!
//! Nothing in here changes after a match starts.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::Side;
use crate::cards::{Color, Tier};

/// Copies of each card color in a fresh deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    pub white: u32,
    pub black: u32,
    pub red: u32,
    pub blue: u32,
    pub yellow: u32,
    pub purple: u32,
    pub orange: u32,
    pub green: u32,
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self {
            white: 4,
            black: 4,
            red: 8,
            blue: 8,
            yellow: 8,
            purple: 6,
            orange: 6,
            green: 6,
        }
    }
}

impl DeckComposition {
    /// Copies of the given color.
    #[must_use]
    pub fn count(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
            Color::Red => self.red,
            Color::Blue => self.blue,
            Color::Yellow => self.yellow,
            Color::Purple => self.purple,
            Color::Orange => self.orange,
            Color::Green => self.green,
        }
    }

    /// Total number of cards in the deck.
    #[must_use]
    pub fn total(&self) -> u32 {
        Color::ALL.iter().map(|&c| self.count(c)).sum()
    }
}

/// Coin value of a card by tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierValues {
    pub t1: u32,
    pub t2: u32,
    pub black: u32,
    pub white: u32,
}

impl Default for TierValues {
    fn default() -> Self {
        Self {
            t1: 1,
            t2: 2,
            black: 4,
            white: 5,
        }
    }
}

impl TierValues {
    /// Value for the given tier.
    #[must_use]
    pub fn for_tier(&self, tier: Tier) -> u32 {
        match tier {
            Tier::One => self.t1,
            Tier::Two => self.t2,
            Tier::Black => self.black,
            Tier::White => self.white,
        }
    }
}

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use tierstack::core::{GameConfig, Side};
///
/// let config = GameConfig::default()
///     .with_coins_to_win(5)
///     .with_ai_think_delay(Duration::ZERO)
///     .with_first_starter(Side::Ai);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.deck.total(), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cumulative coins that end the match.
    pub coins_to_win: u32,

    /// Cards dealt to each side before the very first round.
    pub starting_hand_size: usize,

    /// Cosmetic pause before the AI acts.
    pub ai_think_delay: Duration,

    /// Side that starts the first round.
    pub first_starter: Side,

    /// Deck composition.
    pub deck: DeckComposition,

    /// Card values by tier.
    pub values: TierValues,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            coins_to_win: 10,
            starting_hand_size: 4,
            ai_think_delay: Duration::from_millis(600),
            first_starter: Side::Player,
            deck: DeckComposition::default(),
            values: TierValues::default(),
        }
    }
}

impl GameConfig {
    /// Set the win threshold.
    #[must_use]
    pub fn with_coins_to_win(mut self, coins: u32) -> Self {
        self.coins_to_win = coins;
        self
    }

    /// Set the initial deal size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the AI thinking delay.
    #[must_use]
    pub fn with_ai_think_delay(mut self, delay: Duration) -> Self {
        self.ai_think_delay = delay;
        self
    }

    /// Set the first round's starter.
    #[must_use]
    pub fn with_first_starter(mut self, side: Side) -> Self {
        self.first_starter = side;
        self
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckComposition) -> Self {
        self.deck = deck;
        self
    }

    /// Set the tier values.
    #[must_use]
    pub fn with_values(mut self, values: TierValues) -> Self {
        self.values = values;
        self
    }

    /// Check that the configuration describes a playable match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coins_to_win == 0 {
            return Err(ConfigError::ZeroCoinsToWin);
        }
        if self.deck.total() == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        Ok(())
    }
}
