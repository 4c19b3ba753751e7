//! Cards played during the current round.

use crate::cards::{CardInstance, CardTemplate};

/// Append-only record of this round's plays. Only the top card matters
/// to the rules.
#[derive(Clone, Debug, Default)]
pub struct TableStack {
    cards: Vec<CardInstance>,
}

impl TableStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card on top.
    pub fn place(&mut self, card: CardInstance) {
        self.cards.push(card);
    }

    /// The most recently played card.
    #[must_use]
    pub fn top(&self) -> Option<&CardInstance> {
        self.cards.last()
    }

    /// Template of the top card, as the rule checks see it.
    #[must_use]
    pub fn top_template(&self) -> Option<&CardTemplate> {
        self.top().map(CardInstance::template)
    }

    /// Coins the round is currently worth (0 on an empty table).
    #[must_use]
    pub fn top_value(&self) -> u32 {
        self.top().map_or(0, CardInstance::value)
    }

    /// Remove every card, top first.
    pub fn clear(&mut self) -> Vec<CardInstance> {
        let mut cards = std::mem::take(&mut self.cards);
        cards.reverse();
        cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in play order.
    #[must_use]
    pub fn cards(&self) -> &[CardInstance] {
        &self.cards
    }

    /// Leaf cards on the table.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cards.iter().map(CardInstance::population).sum()
    }
}
