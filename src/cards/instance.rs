//! Card instances - physical cards in a match.
//!
//! A `CardInstance` is owned by exactly one container at a time (draw pile,
//! discard pile, a hand, or the table) and moves between them by value.
//!
//! ## Fused Cards
//!
//! Combining two cards produces a new instance that keeps the two inputs
//! as `components`. The match's card population counts *leaf* cards, so
//! fusing never creates or destroys population. When a fused card is
//! discarded, its leaves return to the discard pile individually.

use std::sync::Arc;

use super::definition::{CardTemplate, Color, Tier};
use crate::core::CardUid;

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardInstance {
    uid: CardUid,
    template: Arc<CardTemplate>,
    components: Vec<CardInstance>,
}

impl CardInstance {
    /// Create a plain (non-fused) card.
    #[must_use]
    pub fn new(uid: CardUid, template: Arc<CardTemplate>) -> Self {
        Self {
            uid,
            template,
            components: Vec::new(),
        }
    }

    /// Create a fused card that owns the two consumed inputs.
    #[must_use]
    pub fn fused(uid: CardUid, template: Arc<CardTemplate>, a: CardInstance, b: CardInstance) -> Self {
        Self {
            uid,
            template,
            components: vec![a, b],
        }
    }

    #[must_use]
    pub fn uid(&self) -> CardUid {
        self.uid
    }

    #[must_use]
    pub fn template(&self) -> &CardTemplate {
        &self.template
    }

    /// Shared handle to the template.
    #[must_use]
    pub fn template_arc(&self) -> &Arc<CardTemplate> {
        &self.template
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.template.tier
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.template.color
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.template.value
    }

    /// Was this card produced by a combine?
    #[must_use]
    pub fn is_fused(&self) -> bool {
        !self.components.is_empty()
    }

    /// The two cards consumed to make this one (empty for plain cards).
    #[must_use]
    pub fn components(&self) -> &[CardInstance] {
        &self.components
    }

    /// Number of leaf cards this instance stands for.
    #[must_use]
    pub fn population(&self) -> usize {
        if self.components.is_empty() {
            1
        } else {
            self.components.iter().map(CardInstance::population).sum()
        }
    }

    /// Break a card down into its leaf cards.
    ///
    /// A plain card yields itself.
    #[must_use]
    pub fn into_leaves(self) -> Vec<CardInstance> {
        let mut leaves = Vec::with_capacity(self.population());
        let mut pending = vec![self];
        while let Some(mut card) = pending.pop() {
            if card.components.is_empty() {
                leaves.push(card);
            } else {
                pending.extend(card.components.drain(..).rev());
            }
        }
        leaves
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.uid, self.template)
    }
}
