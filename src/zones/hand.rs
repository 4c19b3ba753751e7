//! A side's hand.
//!
//! Order is irrelevant to the rules but is preserved, because the AI
//! scans its hand in storage order and that order is observable.

use crate::cards::{CardInstance, Tier};
use crate::core::CardUid;

use super::deck::Deck;

/// Cards owned by one side.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<CardInstance>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand holding exactly these cards.
    #[must_use]
    pub fn from_cards(cards: Vec<CardInstance>) -> Self {
        Self { cards }
    }

    /// Draw one card from the deck into this hand.
    ///
    /// Returns the drawn card's id, or `None` if the deck is starved.
    pub fn draw_from(&mut self, deck: &mut Deck) -> Option<CardUid> {
        let card = deck.draw_one()?;
        let uid = card.uid();
        self.cards.push(card);
        Some(uid)
    }

    /// Draw up to `count` cards; returns how many arrived.
    pub fn draw_many(&mut self, deck: &mut Deck, count: usize) -> usize {
        (0..count).filter(|_| self.draw_from(deck).is_some()).count()
    }

    /// Add a card to the end of the hand.
    pub fn insert(&mut self, card: CardInstance) {
        self.cards.push(card);
    }

    /// Remove a card by id.
    pub fn remove(&mut self, uid: CardUid) -> Option<CardInstance> {
        let pos = self.position(uid)?;
        Some(self.cards.remove(pos))
    }

    /// Remove the cards at two distinct storage positions.
    ///
    /// Returns them in argument order.
    ///
    /// # Panics
    ///
    /// Panics if the indices are equal or out of bounds.
    pub fn take_pair(&mut self, i: usize, j: usize) -> (CardInstance, CardInstance) {
        assert_ne!(i, j, "cannot take the same card twice");
        if i > j {
            let first = self.cards.remove(i);
            let second = self.cards.remove(j);
            (first, second)
        } else {
            let second = self.cards.remove(j);
            let first = self.cards.remove(i);
            (first, second)
        }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, uid: CardUid) -> Option<&CardInstance> {
        self.cards.iter().find(|c| c.uid() == uid)
    }

    /// Storage position of a card.
    #[must_use]
    pub fn position(&self, uid: CardUid) -> Option<usize> {
        self.cards.iter().position(|c| c.uid() == uid)
    }

    #[must_use]
    pub fn contains(&self, uid: CardUid) -> bool {
        self.position(uid).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in storage order.
    #[must_use]
    pub fn cards(&self) -> &[CardInstance] {
        &self.cards
    }

    /// Iterate in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Cards of one tier, in storage order.
    pub fn of_tier(&self, tier: Tier) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter().filter(move |c| c.tier() == tier)
    }

    /// Leaf cards held.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cards.iter().map(CardInstance::population).sum()
    }
}
