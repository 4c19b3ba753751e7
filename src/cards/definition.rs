//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties shared by every copy of a
//! card: tier, color, coin value and display name. Templates are created
//! once by the catalog and shared by reference (`Arc`) across instances.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Rank of a card, determining which card may follow it.
///
/// The tiers form a closed cycle: 1 → 2 → Black → White → 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    One = 1,
    Two = 2,
    Black = 3,
    White = 4,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 4] = [Tier::One, Tier::Two, Tier::Black, Tier::White];

    /// Numeric rank (1-4).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Parse a numeric rank. Unknown ranks yield `None`.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Tier> {
        match rank {
            1 => Some(Tier::One),
            2 => Some(Tier::Two),
            3 => Some(Tier::Black),
            4 => Some(Tier::White),
            _ => None,
        }
    }

    /// The only tier allowed to follow this one on the table.
    #[must_use]
    pub const fn successor(self) -> Tier {
        match self {
            Tier::One => Tier::Two,
            Tier::Two => Tier::Black,
            Tier::Black => Tier::White,
            Tier::White => Tier::One,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Orange,
    Purple,
    Green,
    Black,
    White,
}

impl Color {
    /// Every color, in catalog order.
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::Orange,
        Color::Purple,
        Color::Green,
        Color::Black,
        Color::White,
    ];

    /// Tier at which this color exists.
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Color::Red | Color::Yellow | Color::Blue => Tier::One,
            Color::Orange | Color::Purple | Color::Green => Tier::Two,
            Color::Black => Tier::Black,
            Color::White => Tier::White,
        }
    }

    /// Is this one of the three tier-2 colors?
    #[must_use]
    pub const fn is_secondary(self) -> bool {
        matches!(self, Color::Orange | Color::Purple | Color::Green)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Orange => "Orange",
            Color::Purple => "Purple",
            Color::Green => "Green",
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use tierstack::cards::{CardTemplate, Color, Tier};
///
/// let red = CardTemplate::new(Tier::One, Color::Red, 1).unwrap();
/// assert_eq!(red.display_name, "Red");
/// assert_eq!(red.code(), "T1_Red");
///
/// assert!(CardTemplate::new(Tier::Two, Color::Red, 2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTemplate {
    pub tier: Tier,
    pub color: Color,
    /// Coins awarded when this card tops the table at settlement.
    pub value: u32,
    pub display_name: String,
}

impl CardTemplate {
    /// Create a template, checking that the color exists at the tier.
    pub fn new(tier: Tier, color: Color, value: u32) -> Result<Self, ConfigError> {
        if color.tier() != tier {
            return Err(ConfigError::TierColorMismatch { tier, color });
        }
        Ok(Self {
            tier,
            color,
            value,
            display_name: color.name().to_string(),
        })
    }

    /// Override the display name (builder pattern).
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Stable identifier such as `T1_Red` or `T3_Black`.
    #[must_use]
    pub fn code(&self) -> String {
        format!("T{}_{}", self.tier.rank(), self.color.name())
    }
}

impl std::fmt::Display for CardTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.display_name, self.value)
    }
}
