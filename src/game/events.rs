//! Notifications for the presentation layer.
//!
//! The coordinator pushes events as state changes; the host drains them
//! after each call and renders whatever it likes. Events carry ids and
//! colors only, never references into coordinator state.

use serde::{Deserialize, Serialize};

use crate::cards::Color;
use crate::core::{CardUid, Side};

/// Something observable that happened in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted {
        round: u32,
        starter: Side,
    },
    /// `count` may be lower than requested when the deck starves.
    CardsDrawn {
        side: Side,
        count: usize,
    },
    CardPlayed {
        side: Side,
        card: CardUid,
        color: Color,
    },
    CardsCombined {
        side: Side,
        consumed: [CardUid; 2],
        result: CardUid,
        color: Color,
    },
    Passed {
        side: Side,
    },
    RoundSettled {
        winner: Side,
        coins_gained: u32,
    },
    TurnChanged {
        actor: Side,
    },
    GameOver {
        winner: Side,
    },
}

/// FIFO queue of pending events.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<GameEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.queue.drain(..)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
