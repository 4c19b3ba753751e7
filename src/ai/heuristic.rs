//! Greedy rule-following AI.
//!
//! Decision order, first success wins:
//! 1. Table top is tier 1: fuse the first pair of tier-1 cards whose
//!    result may follow the top, and play the result.
//! 2. Table top is tier 2: fuse the first pair of differently colored
//!    tier-2 cards into Black, and play it.
//! 3. Play the first legal card, preferring White, then Black, then
//!    tier 2, then tier 1.
//! 4. Pass.
//!
//! "First" always means hand storage order, outer card before inner card.
//! This is not optimal play; the ordering is part of the AI's observable
//! behavior and is kept as is.

use tracing::debug;

use crate::cards::{CardInstance, CardTemplate, Tier};
use crate::rules::{can_play_after, resolve_combination, Forge};
use crate::zones::Hand;

use super::Strategy;

/// Direct-play preference, strongest first.
const PLAY_PREFERENCE: [Tier; 4] = [Tier::White, Tier::Black, Tier::Two, Tier::One];

/// The built-in AI.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    /// First `(i, j)` pair of `tier` cards whose fusion may follow `top`.
    fn find_answering_pair(
        hand: &Hand,
        tier: Tier,
        top: &CardTemplate,
        forge: &Forge<'_>,
    ) -> Option<(usize, usize)> {
        let cards = hand.cards();
        for (i, a) in cards.iter().enumerate() {
            if a.tier() != tier {
                continue;
            }
            for (j, b) in cards.iter().enumerate() {
                if i == j || b.tier() != tier {
                    continue;
                }
                let Ok(color) = resolve_combination(a.template(), b.template()) else {
                    continue;
                };
                if can_play_after(Some(top), forge.catalog().template(color)) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    fn forced_combine(hand: &mut Hand, top: &CardTemplate, forge: &mut Forge<'_>) -> Option<CardInstance> {
        let tier = match top.tier {
            Tier::One | Tier::Two => top.tier,
            Tier::Black | Tier::White => return None,
        };
        let (i, j) = Self::find_answering_pair(hand, tier, top, forge)?;
        forge.combine_in_hand(hand, i, j).ok()
    }

    fn direct_play(hand: &mut Hand, top: Option<&CardTemplate>) -> Option<CardInstance> {
        let uid = PLAY_PREFERENCE.iter().find_map(|&tier| {
            hand.of_tier(tier)
                .find(|card| can_play_after(top, card.template()))
                .map(CardInstance::uid)
        })?;
        hand.remove(uid)
    }
}

impl Strategy for HeuristicStrategy {
    fn decide_play(
        &self,
        hand: &mut Hand,
        table_top: Option<&CardTemplate>,
        forge: &mut Forge<'_>,
    ) -> Option<CardInstance> {
        if let Some(top) = table_top {
            if let Some(fused) = Self::forced_combine(hand, top, forge) {
                debug!(card = %fused, answering = %top, "AI fuses to answer the table");
                return Some(fused);
            }
        }

        let choice = Self::direct_play(hand, table_top);
        match &choice {
            Some(card) => debug!(card = %card, "AI plays from hand"),
            None => debug!(hand = hand.len(), "AI has no legal play"),
        }
        choice
    }
}
