//! Card catalog for template lookup.
//!
//! The `CardCatalog` holds exactly one template per color, together with
//! how many copies of each the deck contains. It is built once and shared
//! immutably for the rest of the match.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardTemplate, Color};
use crate::core::{ConfigError, GameConfig};

/// Registry of card templates and their deck counts.
///
/// ## Example
///
/// ```
/// use tierstack::cards::{CardCatalog, Color};
///
/// let catalog = CardCatalog::standard();
///
/// assert_eq!(catalog.total_cards(), 50);
/// assert_eq!(catalog.template(Color::White).value, 5);
/// assert_eq!(catalog.copies(Color::Purple), 6);
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    templates: FxHashMap<Color, Arc<CardTemplate>>,
    copies: FxHashMap<Color, u32>,
}

impl CardCatalog {
    /// Build a catalog from explicit `(template, copies)` entries.
    ///
    /// Every color must appear exactly once.
    pub fn new(entries: impl IntoIterator<Item = (CardTemplate, u32)>) -> Result<Self, ConfigError> {
        let mut templates = FxHashMap::default();
        let mut copies = FxHashMap::default();

        for (template, count) in entries {
            let color = template.color;
            if templates.insert(color, Arc::new(template)).is_some() {
                return Err(ConfigError::DuplicateColor(color));
            }
            copies.insert(color, count);
        }

        if let Some(&missing) = Color::ALL.iter().find(|c| !templates.contains_key(*c)) {
            return Err(ConfigError::MissingColor(missing));
        }

        let catalog = Self { templates, copies };
        if catalog.total_cards() == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        Ok(catalog)
    }

    /// Resolve templates and counts from a match configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// The default 50-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_validated(&GameConfig::default())
    }

    /// Every color gets a template at its own tier, so only the config
    /// itself needs checking.
    fn from_validated(config: &GameConfig) -> Self {
        let mut templates = FxHashMap::default();
        let mut copies = FxHashMap::default();

        for color in Color::ALL {
            let tier = color.tier();
            let template = CardTemplate {
                tier,
                color,
                value: config.values.for_tier(tier),
                display_name: color.name().to_string(),
            };
            templates.insert(color, Arc::new(template));
            copies.insert(color, config.deck.count(color));
        }

        Self { templates, copies }
    }

    /// Template for a color.
    ///
    /// Every color is present by construction.
    #[must_use]
    pub fn template(&self, color: Color) -> &Arc<CardTemplate> {
        &self.templates[&color]
    }

    /// Copies of a color in a fresh deck.
    #[must_use]
    pub fn copies(&self, color: Color) -> u32 {
        self.copies.get(&color).copied().unwrap_or(0)
    }

    /// Total cards in a fresh deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.copies.values().map(|&n| n as usize).sum()
    }

    /// Templates in catalog color order, each repeated by its copy count.
    ///
    /// This is the unshuffled order of a fresh deck.
    pub fn deck_list(&self) -> impl Iterator<Item = &Arc<CardTemplate>> {
        Color::ALL.iter().flat_map(move |color| {
            std::iter::repeat(self.template(*color)).take(self.copies(*color) as usize)
        })
    }

    /// Iterate over all templates in catalog color order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardTemplate>> {
        Color::ALL.iter().map(move |color| self.template(*color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Tier;
    use crate::core::{DeckComposition, TierValues};

    #[test]
    fn test_standard_catalog() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.total_cards(), 50);
        assert_eq!(catalog.iter().count(), 8);
        assert_eq!(catalog.template(Color::Red).tier, Tier::One);
        assert_eq!(catalog.template(Color::Orange).value, 2);
        assert_eq!(catalog.template(Color::Black).value, 4);
    }

    #[test]
    fn test_from_config_matches_standard() {
        let from_config = CardCatalog::from_config(&GameConfig::default()).unwrap();
        let standard = CardCatalog::standard();

        for color in Color::ALL {
            assert_eq!(from_config.template(color), standard.template(color));
            assert_eq!(from_config.copies(color), standard.copies(color));
        }
    }

    #[test]
    fn test_from_config_custom_counts() {
        let deck = DeckComposition {
            red: 2,
            ..DeckComposition::default()
        };
        let catalog = CardCatalog::from_config(&GameConfig::default().with_deck(deck)).unwrap();

        assert_eq!(catalog.copies(Color::Red), 2);
        assert_eq!(catalog.total_cards(), 44);
    }

    #[test]
    fn test_from_config_custom_values_and_rejection() {
        let values = TierValues {
            white: 9,
            ..TierValues::default()
        };
        let catalog = CardCatalog::from_config(&GameConfig::default().with_values(values)).unwrap();
        assert_eq!(catalog.template(Color::White).value, 9);
        assert_eq!(catalog.template(Color::White).display_name, "White");

        let err = CardCatalog::from_config(&GameConfig::default().with_coins_to_win(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroCoinsToWin);
    }

    #[test]
    fn test_deck_list_length_and_order() {
        let catalog = CardCatalog::standard();
        let list: Vec<_> = catalog.deck_list().collect();

        assert_eq!(list.len(), 50);
        assert_eq!(list[0].color, Color::Red);
        assert_eq!(list[49].color, Color::White);
        assert_eq!(list.iter().filter(|t| t.color == Color::Blue).count(), 8);
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let red = CardTemplate::new(Tier::One, Color::Red, 1).unwrap();
        let err = CardCatalog::new(vec![(red.clone(), 1), (red, 1)]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateColor(Color::Red));
    }

    #[test]
    fn test_missing_color_rejected() {
        let red = CardTemplate::new(Tier::One, Color::Red, 1).unwrap();
        let err = CardCatalog::new(vec![(red, 1)]).unwrap_err();
        assert_eq!(err, ConfigError::MissingColor(Color::Yellow));
    }
}
