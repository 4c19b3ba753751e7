//! Card instance identification.
//!
//! Every physical card in a match (and every fused card produced by a
//! combine) carries a unique `CardUid`. Ids are handed out by a single
//! `UidAllocator` owned by the match, so they never repeat within it.
//!
//! ## Usage
//!
//! ```
//! use tierstack::core::{CardUid, UidAllocator};
//!
//! let mut uids = UidAllocator::new();
//! let first = uids.alloc();
//! let second = uids.alloc();
//!
//! assert_ne!(first, second);
//! assert_eq!(first, CardUid(0));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Monotonic source of fresh `CardUid`s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UidAllocator {
    next: u32,
}

impl UidAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> CardUid {
        let id = CardUid(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
