//! Action representation for the round log.
//!
//! Every accepted intent becomes an `Action`; the coordinator wraps it in
//! an `ActionRecord` stamped with the side, round and sequence number.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::CardUid;
use super::player::Side;

/// An accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A card moved from hand to the table.
    Play(CardUid),
    /// Two hand cards fused into `result`.
    Combine {
        consumed: SmallVec<[CardUid; 2]>,
        result: CardUid,
    },
    /// The side left the round.
    Pass,
}

impl Action {
    /// Create a combine action.
    #[must_use]
    pub fn combine(a: CardUid, b: CardUid, result: CardUid) -> Self {
        Action::Combine {
            consumed: SmallVec::from_buf([a, b]),
            result,
        }
    }
}

/// A recorded action with metadata for the round log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken (starts at 1).
    pub round: u32,

    /// Sequence number within the round.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            side,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_keeps_consumed_order() {
        let combine = Action::combine(CardUid(1), CardUid(2), CardUid(9));

        match combine {
            Action::Combine { consumed, result } => {
                assert_eq!(consumed.as_slice(), &[CardUid(1), CardUid(2)]);
                assert_eq!(result, CardUid(9));
            }
            other => panic!("expected a combine, got {other:?}"),
        }
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(Side::Ai, Action::Pass, 3, 5);

        assert_eq!(record.side, Side::Ai);
        assert_eq!(record.action, Action::Pass);
        assert_eq!(record.round, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            Side::Player,
            Action::combine(CardUid(3), CardUid(4), CardUid(60)),
            2,
            1,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
