//! Match assembly.

use tracing::debug;

use crate::ai::{HeuristicStrategy, Strategy};
use crate::cards::{CardCatalog, CardInstance, Color};
use crate::core::{ConfigError, GameConfig, GameRng, UidAllocator};
use crate::zones::Deck;

use super::coordinator::TurnCoordinator;
use super::timer::{Clock, SystemClock};

/// Builder for a [`TurnCoordinator`].
///
/// ## Usage
///
/// ```
/// use tierstack::core::{GameConfig, Side};
/// use tierstack::game::{CoordinatorBuilder, Phase};
///
/// let game = CoordinatorBuilder::new()
///     .config(GameConfig::default().with_coins_to_win(15))
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.phase(), Phase::Acting(Side::Player));
/// assert_eq!(game.hand(Side::Player).len(), 5);
/// assert_eq!(game.population(), 50);
/// ```
pub struct CoordinatorBuilder<S: Strategy = HeuristicStrategy> {
    config: GameConfig,
    seed: Option<u64>,
    stacked: Option<Vec<Color>>,
    clock: Option<Box<dyn Clock>>,
    strategy: S,
}

impl Default for CoordinatorBuilder<HeuristicStrategy> {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: None,
            stacked: None,
            clock: None,
            strategy: HeuristicStrategy,
        }
    }
}

impl CoordinatorBuilder<HeuristicStrategy> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Strategy> CoordinatorBuilder<S> {
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the shuffle seed. Without one the seed comes from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the configured deck with these cards, drawn in the given
    /// order without an initial shuffle.
    #[must_use]
    pub fn stacked_deck(mut self, draw_order: Vec<Color>) -> Self {
        self.stacked = Some(draw_order);
        self
    }

    /// Time source for the AI delay. Defaults to [`SystemClock`].
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Swap in a different AI.
    #[must_use]
    pub fn strategy<T: Strategy>(self, strategy: T) -> CoordinatorBuilder<T> {
        CoordinatorBuilder {
            config: self.config,
            seed: self.seed,
            stacked: self.stacked,
            clock: self.clock,
            strategy,
        }
    }

    /// Validate the configuration, build the deck, and deal the first round.
    pub fn build(self) -> Result<TurnCoordinator<S>, ConfigError> {
        self.config.validate()?;
        let catalog = CardCatalog::from_config(&self.config)?;

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let seed = rng.seed();
        let deck_rng = rng.for_context("deck");

        let mut uids = UidAllocator::new();
        let deck = match self.stacked {
            Some(order) if order.is_empty() => return Err(ConfigError::EmptyDeck),
            Some(order) => {
                let cards = order
                    .into_iter()
                    .map(|color| CardInstance::new(uids.alloc(), catalog.template(color).clone()))
                    .collect();
                Deck::stacked(cards, deck_rng)
            }
            None => Deck::from_catalog(&catalog, &mut uids, deck_rng),
        };
        debug!(seed, cards = deck.population(), "match assembled");

        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let mut coordinator = TurnCoordinator::assemble(self.config, catalog, uids, seed, deck, clock, self.strategy);
        coordinator.start();
        Ok(coordinator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTemplate;
    use crate::core::Side;
    use crate::game::Phase;
    use crate::rules::Forge;
    use crate::zones::Hand;

    /// Always passes.
    struct Passive;

    impl Strategy for Passive {
        fn decide_play(
            &self,
            _hand: &mut Hand,
            _table_top: Option<&CardTemplate>,
            _forge: &mut Forge<'_>,
        ) -> Option<CardInstance> {
            None
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = CoordinatorBuilder::new()
            .config(GameConfig::default().with_coins_to_win(0))
            .build();
        assert!(matches!(result, Err(ConfigError::ZeroCoinsToWin)));
    }

    #[test]
    fn test_empty_stacked_deck_rejected() {
        let result = CoordinatorBuilder::new().stacked_deck(Vec::new()).build();
        assert!(matches!(result, Err(ConfigError::EmptyDeck)));
    }

    #[test]
    fn test_seed_is_recorded() {
        let game = CoordinatorBuilder::new().seed(99).build().unwrap();
        assert_eq!(game.seed(), 99);
        assert_eq!(game.card_total(), 50);
    }

    #[test]
    fn test_ai_may_start() {
        let game = CoordinatorBuilder::new()
            .config(GameConfig::default().with_first_starter(Side::Ai))
            .seed(1)
            .build()
            .unwrap();

        assert_eq!(game.phase(), Phase::Acting(Side::Ai));
        assert!(game.pending_ai_turn().is_some());
    }

    #[test]
    fn test_custom_strategy() {
        let mut game = CoordinatorBuilder::new()
            .strategy(Passive)
            .config(GameConfig::default().with_first_starter(Side::Ai))
            .seed(5)
            .build()
            .unwrap();

        let due = game.pending_ai_turn().unwrap().due_at;
        assert!(game.tick(due));
        assert_eq!(game.round().number(), 2);
        assert_eq!(game.round().starter(), Side::Ai);
    }
}
