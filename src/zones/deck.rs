//! Draw pile and discard pile.
//!
//! The `Deck` owns every card that is not in a hand or on the table.
//! Drawing pops from the end of the draw pile; an empty draw pile is
//! refilled from the discard pile and reshuffled before the draw.

use tracing::{debug, warn};

use crate::cards::{CardCatalog, CardInstance};
use crate::core::{GameRng, UidAllocator};

/// Draw and discard piles with recycle-on-empty drawing.
///
/// ## Usage
///
/// ```
/// use tierstack::cards::CardCatalog;
/// use tierstack::core::{GameRng, UidAllocator};
/// use tierstack::zones::Deck;
///
/// let catalog = CardCatalog::standard();
/// let mut uids = UidAllocator::new();
/// let mut deck = Deck::from_catalog(&catalog, &mut uids, GameRng::new(7));
///
/// let card = deck.draw_one().unwrap();
/// assert_eq!(deck.draw_len(), 49);
///
/// deck.discard(card);
/// assert_eq!(deck.discard_len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<CardInstance>,
    discard_pile: Vec<CardInstance>,
    rng: GameRng,
}

impl Deck {
    /// Create a deck from the given cards and shuffle it once.
    #[must_use]
    pub fn new(cards: Vec<CardInstance>, rng: GameRng) -> Self {
        let mut deck = Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Create a fresh, shuffled deck with one instance per catalog copy.
    #[must_use]
    pub fn from_catalog(catalog: &CardCatalog, uids: &mut UidAllocator, rng: GameRng) -> Self {
        let cards = catalog
            .deck_list()
            .map(|template| CardInstance::new(uids.alloc(), template.clone()))
            .collect();
        Self::new(cards, rng)
    }

    /// Create an unshuffled deck whose first element is drawn first.
    ///
    /// Recycled discards are still shuffled with `rng`.
    #[must_use]
    pub fn stacked(mut draw_order: Vec<CardInstance>, rng: GameRng) -> Self {
        draw_order.reverse();
        Self {
            draw_pile: draw_order,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Shuffle the draw pile in place.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.draw_pile);
    }

    /// Draw one card.
    ///
    /// When the draw pile is empty the whole discard pile becomes the new
    /// draw pile and is reshuffled first. Returns `None` only when both
    /// piles are empty.
    pub fn draw_one(&mut self) -> Option<CardInstance> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                warn!("deck starved: draw and discard piles are both empty");
                return None;
            }
            debug!(recycled = self.discard_pile.len(), "recycling discard pile");
            self.draw_pile.append(&mut self.discard_pile);
            self.shuffle();
        }
        self.draw_pile.pop()
    }

    /// Put a card on the discard pile. `None` is ignored.
    ///
    /// Fused cards are broken back into the cards they were made from.
    pub fn discard(&mut self, card: impl Into<Option<CardInstance>>) {
        if let Some(card) = card.into() {
            if card.is_fused() {
                self.discard_pile.extend(card.into_leaves());
            } else {
                self.discard_pile.push(card);
            }
        }
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Are both piles empty?
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }

    /// Draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self) -> &[CardInstance] {
        &self.draw_pile
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardInstance] {
        &self.discard_pile
    }

    /// Leaf cards held by both piles.
    #[must_use]
    pub fn population(&self) -> usize {
        self.draw_pile
            .iter()
            .chain(&self.discard_pile)
            .map(CardInstance::population)
            .sum()
    }
}
