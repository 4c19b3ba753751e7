//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A match is always contested by exactly two sides: the externally
//! controlled `Player` and the autonomous `Ai`.
//!
//! ## SideMap
//!
//! Per-side data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The side driven by external play/pass intents.
    Player,
    /// The side driven by the AI strategy.
    Ai,
}

impl Side {
    /// Both sides, in index order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Ai];

    /// Get the raw index (0 for `Player`, 1 for `Ai`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => 1,
        }
    }

    /// The other side.
    ///
    /// ```
    /// use tierstack::core::Side;
    ///
    /// assert_eq!(Side::Player.opponent(), Side::Ai);
    /// assert_eq!(Side::Ai.opponent(), Side::Player);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Is this side driven by the AI strategy?
    #[must_use]
    pub const fn is_ai(self) -> bool {
        matches!(self, Side::Ai)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tierstack::core::{Side, SideMap};
///
/// let mut coins: SideMap<u32> = SideMap::with_value(0);
/// coins[Side::Ai] += 4;
///
/// assert_eq!(coins[Side::Player], 0);
/// assert_eq!(coins[Side::Ai], 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Ai)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over the stored values in side order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(Side::Ai.index(), 1);
        assert!(Side::Ai.is_ai());
        assert!(!Side::Player.is_ai());
        assert_eq!(format!("{}", Side::Ai), "AI");
    }

    #[test]
    fn test_opponent_is_involution() {
        for side in Side::ALL {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);

        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Ai], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i32> = SideMap::with_value(0);

        map[Side::Player] = 3;
        *map.get_mut(Side::Ai) += 7;

        assert_eq!(map[Side::Player], 3);
        assert_eq!(map[Side::Ai], 7);
    }

    #[test]
    fn test_side_map_values_in_side_order() {
        let map: SideMap<i32> = SideMap::new(|s| s.index() as i32);

        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values, vec![0, 1]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<u32> = SideMap::new(|s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
