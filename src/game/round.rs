//! Match phases and per-round bookkeeping.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionRecord, InvariantViolation, Side, SideMap};

/// Where the match is in its round cycle.
///
/// `RoundStart` and `RoundSettling` are passed through inside a single
/// coordinator call; callers normally observe `Acting` or `GameOver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    RoundStart,
    Acting(Side),
    RoundSettling,
    GameOver { winner: Side },
}

impl Phase {
    /// The side allowed to act, if any.
    #[must_use]
    pub fn actor(self) -> Option<Side> {
        match self {
            Phase::Acting(side) => Some(side),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }
}

/// Whether a side is still contesting the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideStatus {
    #[default]
    Active,
    Passed,
}

/// How the round stands after a status change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both sides still active.
    Contested,
    /// Exactly one side remains; it takes the round.
    Won(Side),
}

/// State of the round in progress.
#[derive(Clone, Debug)]
pub struct RoundState {
    number: u32,
    starter: Side,
    status: SideMap<SideStatus>,
    log: Vector<ActionRecord>,
}

impl RoundState {
    /// Fresh round with both sides active. Rounds are numbered from 1.
    #[must_use]
    pub fn new(number: u32, starter: Side) -> Self {
        Self {
            number,
            starter,
            status: SideMap::default(),
            log: Vector::new(),
        }
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn starter(&self) -> Side {
        self.starter
    }

    #[must_use]
    pub fn status(&self, side: Side) -> SideStatus {
        self.status[side]
    }

    #[must_use]
    pub fn is_active(&self, side: Side) -> bool {
        self.status[side] == SideStatus::Active
    }

    /// Actions recorded so far this round.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        self.log.len() as u32
    }

    /// This round's accepted actions, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    /// Append an action to the round log.
    pub fn record(&mut self, side: Side, action: Action) -> &ActionRecord {
        let record = ActionRecord::new(side, action, self.number, self.sequence());
        self.log.push_back(record);
        &self.log[self.log.len() - 1]
    }

    /// Take `side` out of the round.
    pub fn mark_passed(&mut self, side: Side) {
        self.status[side] = SideStatus::Passed;
    }

    /// Decide whether the round is over.
    ///
    /// Both sides inactive at once cannot happen through legal play.
    pub fn evaluate(&self) -> Result<RoundOutcome, InvariantViolation> {
        match (self.is_active(Side::Player), self.is_active(Side::Ai)) {
            (true, true) => Ok(RoundOutcome::Contested),
            (true, false) => Ok(RoundOutcome::Won(Side::Player)),
            (false, true) => Ok(RoundOutcome::Won(Side::Ai)),
            (false, false) => Err(InvariantViolation::BothSidesInactive { round: self.number }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardUid;

    #[test]
    fn test_phase_actor() {
        assert_eq!(Phase::Acting(Side::Ai).actor(), Some(Side::Ai));
        assert_eq!(Phase::RoundStart.actor(), None);
        assert!(Phase::GameOver { winner: Side::Player }.is_over());
        assert!(!Phase::RoundSettling.is_over());
    }

    #[test]
    fn test_new_round_is_contested() {
        let round = RoundState::new(1, Side::Player);
        assert!(round.is_active(Side::Player));
        assert!(round.is_active(Side::Ai));
        assert_eq!(round.evaluate(), Ok(RoundOutcome::Contested));
    }

    #[test]
    fn test_pass_hands_round_to_other_side() {
        let mut round = RoundState::new(2, Side::Ai);
        round.mark_passed(Side::Ai);

        assert_eq!(round.status(Side::Ai), SideStatus::Passed);
        assert_eq!(round.evaluate(), Ok(RoundOutcome::Won(Side::Player)));
    }

    #[test]
    fn test_both_passed_is_violation() {
        let mut round = RoundState::new(7, Side::Player);
        round.mark_passed(Side::Player);
        round.mark_passed(Side::Ai);

        assert_eq!(round.evaluate(), Err(InvariantViolation::BothSidesInactive { round: 7 }));
    }

    #[test]
    fn test_record_numbers_actions() {
        let mut round = RoundState::new(3, Side::Player);
        round.record(Side::Player, Action::Play(CardUid(4)));
        let second = round.record(Side::Ai, Action::Pass).clone();

        assert_eq!(second.sequence, 1);
        assert_eq!(second.round, 3);
        assert_eq!(round.sequence(), 2);
        assert_eq!(round.log().len(), 2);
    }
}
