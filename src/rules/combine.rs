//! Combining two hand cards into a higher-tier card.
//!
//! Recipes:
//! - tier 1: Red+Blue → Purple, Red+Yellow → Orange, Blue+Yellow → Green
//! - tier 2: any two *different* tier-2 colors → Black
//!
//! Nothing combines above tier 2, and same-color pairs never combine.

use thiserror::Error;
use tracing::debug;

use crate::cards::{CardCatalog, CardInstance, CardTemplate, Color, Tier};
use crate::core::UidAllocator;
use crate::zones::Hand;

/// Why two cards cannot be combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CombineError {
    #[error("cards are of different tiers")]
    TierMismatch,
    #[error("card colors do not combine")]
    ColorMismatch,
    #[error("tier {0} cards cannot be combined")]
    NoRecipe(Tier),
}

/// Color produced by combining `a` and `b`. Order does not matter.
///
/// ```
/// use tierstack::cards::{CardCatalog, Color};
/// use tierstack::rules::{resolve_combination, CombineError};
///
/// let catalog = CardCatalog::standard();
/// let red = catalog.template(Color::Red);
/// let blue = catalog.template(Color::Blue);
///
/// assert_eq!(resolve_combination(red, blue), Ok(Color::Purple));
/// assert_eq!(resolve_combination(red, red), Err(CombineError::ColorMismatch));
/// ```
pub fn resolve_combination(a: &CardTemplate, b: &CardTemplate) -> Result<Color, CombineError> {
    if a.tier != b.tier {
        return Err(CombineError::TierMismatch);
    }

    match a.tier {
        Tier::One => mix_primaries(a.color, b.color).ok_or(CombineError::ColorMismatch),
        Tier::Two => {
            if a.color.is_secondary() && b.color.is_secondary() && a.color != b.color {
                Ok(Color::Black)
            } else {
                Err(CombineError::ColorMismatch)
            }
        }
        tier @ (Tier::Black | Tier::White) => Err(CombineError::NoRecipe(tier)),
    }
}

fn mix_primaries(a: Color, b: Color) -> Option<Color> {
    match (a, b) {
        (Color::Red, Color::Blue) | (Color::Blue, Color::Red) => Some(Color::Purple),
        (Color::Red, Color::Yellow) | (Color::Yellow, Color::Red) => Some(Color::Orange),
        (Color::Blue, Color::Yellow) | (Color::Yellow, Color::Blue) => Some(Color::Green),
        _ => None,
    }
}

/// Produces fused cards: resolves the recipe against the catalog and
/// stamps the result with a fresh id.
pub struct Forge<'a> {
    catalog: &'a CardCatalog,
    uids: &'a mut UidAllocator,
}

impl<'a> Forge<'a> {
    #[must_use]
    pub fn new(catalog: &'a CardCatalog, uids: &'a mut UidAllocator) -> Self {
        Self { catalog, uids }
    }

    /// The catalog this forge resolves templates from.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        self.catalog
    }

    /// Combine the cards at storage positions `i` and `j` of `hand`.
    ///
    /// On success both inputs leave the hand and the fused card is
    /// returned; the caller decides where it goes. On failure the hand is
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds or `i == j`.
    pub fn combine_in_hand(&mut self, hand: &mut Hand, i: usize, j: usize) -> Result<CardInstance, CombineError> {
        let color = {
            let cards = hand.cards();
            resolve_combination(cards[i].template(), cards[j].template())?
        };

        let (a, b) = hand.take_pair(i, j);
        let fused = CardInstance::fused(self.uids.alloc(), self.catalog.template(color).clone(), a, b);
        debug!(result = %fused, "cards combined");
        Ok(fused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardUid;

    fn hand_of(catalog: &CardCatalog, uids: &mut UidAllocator, colors: &[Color]) -> Hand {
        Hand::from_cards(
            colors
                .iter()
                .map(|&c| CardInstance::new(uids.alloc(), catalog.template(c).clone()))
                .collect(),
        )
    }

    #[test]
    fn test_tier_one_recipes_are_symmetric() {
        let catalog = CardCatalog::standard();
        let t = |c| catalog.template(c).as_ref();

        for (a, b, out) in [
            (Color::Red, Color::Blue, Color::Purple),
            (Color::Red, Color::Yellow, Color::Orange),
            (Color::Blue, Color::Yellow, Color::Green),
        ] {
            assert_eq!(resolve_combination(t(a), t(b)), Ok(out));
            assert_eq!(resolve_combination(t(b), t(a)), Ok(out));
        }
    }

    #[test]
    fn test_same_color_pairs_fail() {
        let catalog = CardCatalog::standard();
        for color in [Color::Red, Color::Blue, Color::Yellow, Color::Orange, Color::Purple, Color::Green] {
            let t = catalog.template(color);
            assert_eq!(resolve_combination(t, t), Err(CombineError::ColorMismatch));
        }
    }

    #[test]
    fn test_distinct_secondaries_make_black() {
        let catalog = CardCatalog::standard();
        let secondaries = [Color::Orange, Color::Purple, Color::Green];
        for a in secondaries {
            for b in secondaries.iter().copied().filter(|&b| b != a) {
                assert_eq!(
                    resolve_combination(catalog.template(a), catalog.template(b)),
                    Ok(Color::Black)
                );
            }
        }
    }

    #[test]
    fn test_tier_mismatch() {
        let catalog = CardCatalog::standard();
        assert_eq!(
            resolve_combination(catalog.template(Color::Red), catalog.template(Color::Orange)),
            Err(CombineError::TierMismatch)
        );
    }

    #[test]
    fn test_no_recipe_above_tier_two() {
        let catalog = CardCatalog::standard();
        let black = catalog.template(Color::Black);
        let white = catalog.template(Color::White);

        assert_eq!(resolve_combination(black, black), Err(CombineError::NoRecipe(Tier::Black)));
        assert_eq!(resolve_combination(white, white), Err(CombineError::NoRecipe(Tier::White)));
    }

    #[test]
    fn test_combine_in_hand_consumes_inputs() {
        let catalog = CardCatalog::standard();
        let mut uids = UidAllocator::new();
        let mut hand = hand_of(&catalog, &mut uids, &[Color::Red, Color::White, Color::Yellow]);

        let fused = Forge::new(&catalog, &mut uids).combine_in_hand(&mut hand, 0, 2).unwrap();

        assert_eq!(fused.color(), Color::Orange);
        assert_eq!(fused.tier(), Tier::Two);
        assert_eq!(fused.uid(), CardUid(3));
        assert_eq!(fused.population(), 2);
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.cards()[0].color(), Color::White);
    }

    #[test]
    fn test_failed_combine_leaves_hand_untouched() {
        let catalog = CardCatalog::standard();
        let mut uids = UidAllocator::new();
        let mut hand = hand_of(&catalog, &mut uids, &[Color::Red, Color::Red]);

        let result = Forge::new(&catalog, &mut uids).combine_in_hand(&mut hand, 0, 1);

        assert_eq!(result, Err(CombineError::ColorMismatch));
        assert_eq!(hand.len(), 2);
        assert_eq!(uids.allocated(), 2);
    }
}
