//! The AI's cosmetic thinking delay.
//!
//! Nothing blocks. When the AI's turn begins the coordinator arms a
//! ticket stamped with the round and action sequence; the host calls
//! `tick` with the current time and the ticket fires once due. A ticket
//! whose stamp no longer matches the match state is dropped unfired.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-advanced clock for tests and replays.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the coordinator.
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed_ns: Arc<AtomicU64>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed_ns: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.elapsed_ns.fetch_add(nanos, Ordering::SeqCst);
    }

    /// Time elapsed since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns.load(Ordering::SeqCst))
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }
}

/// An armed AI turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    pub round: u32,
    pub sequence: u32,
    pub due_at: Instant,
}

/// At most one pending AI turn.
#[derive(Clone, Debug, Default)]
pub struct ThinkTimer {
    pending: Option<PendingTurn>,
}

impl ThinkTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a ticket, replacing any earlier one.
    pub fn arm(&mut self, round: u32, sequence: u32, due_at: Instant) {
        self.pending = Some(PendingTurn { round, sequence, due_at });
    }

    pub fn disarm(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingTurn> {
        self.pending.as_ref()
    }

    /// Remove and return the ticket if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<PendingTurn> {
        if self.pending.is_some_and(|turn| turn.due_at <= now) {
            self.pending.take()
        } else {
            None
        }
    }
}
