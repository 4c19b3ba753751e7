//! The match state machine.
//!
//! `TurnCoordinator` is the only thing that mutates hands, table, deck
//! and scores. Hosts drive it with three intents (`attempt_play`,
//! `attempt_combine`, `pass`) plus `tick` for the AI's delayed turn, and
//! read back what happened from the event queue.
//!
//! ```text
//! RoundStart ─► Acting(side) ─play─► Acting(other)
//!                    │
//!                   pass
//!                    ▼
//!              RoundSettling ─► RoundStart (loser starts)
//!                    │
//!                    └────────► GameOver
//! ```

use std::time::Instant;

use im::Vector;
use tracing::{debug, error, info};

use crate::ai::{HeuristicStrategy, Strategy};
use crate::cards::{CardCatalog, CardInstance};
use crate::core::{
    Action, ActionRecord, CardUid, CombineRejection, GameConfig, InvariantViolation, PassRejection, PlayRejection,
    Side, SideMap, UidAllocator,
};
use crate::rules::{can_play_after, Forge};
use crate::zones::{Deck, Hand, TableStack};

use super::events::{EventBus, GameEvent};
use super::round::{Phase, RoundOutcome, RoundState};
use super::score::ScoreBoard;
use super::timer::{Clock, PendingTurn, ThinkTimer};

/// Runs one match between the player and the AI.
///
/// Built with [`CoordinatorBuilder`](super::CoordinatorBuilder); the first
/// round has already been dealt when `build` returns.
///
/// Intents are side-agnostic: a host may also submit intents for
/// `Side::Ai` during its turn. A play or pass supersedes the pending AI
/// decision; a combine restarts its delay.
pub struct TurnCoordinator<S: Strategy = HeuristicStrategy> {
    config: GameConfig,
    catalog: CardCatalog,
    uids: UidAllocator,
    seed: u64,
    deck: Deck,
    hands: SideMap<Hand>,
    table: TableStack,
    scores: ScoreBoard,
    phase: Phase,
    round: RoundState,
    timer: ThinkTimer,
    clock: Box<dyn Clock>,
    strategy: S,
    events: EventBus,
    card_total: usize,
}

impl<S: Strategy> TurnCoordinator<S> {
    pub(super) fn assemble(
        config: GameConfig,
        catalog: CardCatalog,
        uids: UidAllocator,
        seed: u64,
        deck: Deck,
        clock: Box<dyn Clock>,
        strategy: S,
    ) -> Self {
        let card_total = deck.population();
        Self {
            scores: ScoreBoard::new(config.coins_to_win),
            round: RoundState::new(0, config.first_starter),
            config,
            catalog,
            uids,
            seed,
            deck,
            hands: SideMap::default(),
            table: TableStack::new(),
            phase: Phase::RoundStart,
            timer: ThinkTimer::new(),
            clock,
            strategy,
            events: EventBus::default(),
            card_total,
        }
    }

    /// Deal and open the first round.
    pub(super) fn start(&mut self) {
        self.begin_round(self.config.first_starter);
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Play a card from `side`'s hand onto the table.
    pub fn attempt_play(&mut self, side: Side, card: CardUid) -> Result<(), PlayRejection> {
        match self.phase {
            Phase::GameOver { .. } => return Err(PlayRejection::GameOver),
            Phase::Acting(actor) if actor == side => {}
            _ => return Err(PlayRejection::NotYourTurn),
        }

        let instance = self.hands[side].get(card).ok_or(PlayRejection::CardNotInHand)?;
        if !can_play_after(self.table.top_template(), instance.template()) {
            debug!(%side, card = %instance, "play rejected: cannot follow table top");
            return Err(PlayRejection::IllegalSequence);
        }

        let instance = self.hands[side].remove(card).ok_or(PlayRejection::CardNotInHand)?;
        self.place(side, instance);
        self.resolve_round(side);
        Ok(())
    }

    /// Fuse two cards in `side`'s hand. The result stays in the hand and
    /// the turn does not change.
    ///
    /// Returns a copy of the new card.
    pub fn attempt_combine(&mut self, side: Side, a: CardUid, b: CardUid) -> Result<CardInstance, CombineRejection> {
        match self.phase {
            Phase::GameOver { .. } => return Err(CombineRejection::GameOver),
            Phase::Acting(actor) if actor == side => {}
            _ => return Err(CombineRejection::NotYourTurn),
        }

        let hand = &self.hands[side];
        let (Some(i), Some(j)) = (hand.position(a), hand.position(b)) else {
            return Err(CombineRejection::CardNotInHand);
        };
        if i == j {
            return Err(CombineRejection::CardNotInHand);
        }

        let fused = Forge::new(&self.catalog, &mut self.uids).combine_in_hand(&mut self.hands[side], i, j)?;
        let (result, color) = (fused.uid(), fused.color());

        self.round.record(side, Action::combine(a, b, result));
        self.events.push(GameEvent::CardsCombined {
            side,
            consumed: [a, b],
            result,
            color,
        });

        let snapshot = fused.clone();
        self.hands[side].insert(fused);
        self.check_population();

        // The recorded combine moved the sequence past the armed ticket.
        if side.is_ai() {
            self.arm_ai_turn();
        }
        Ok(snapshot)
    }

    /// Leave the current round. The other side takes it.
    pub fn pass(&mut self, side: Side) -> Result<(), PassRejection> {
        match self.phase {
            Phase::GameOver { .. } => return Err(PassRejection::GameOver),
            Phase::Acting(actor) if actor == side => {}
            _ => return Err(PassRejection::NotYourTurn),
        }

        self.pass_turn(side);
        Ok(())
    }

    /// Fire the AI's pending turn if it is due at `now`.
    ///
    /// Returns `true` if the AI acted. A ticket armed for an earlier turn,
    /// or one that comes due after the match ended, is dropped.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.timer.take_due(now) else {
            return false;
        };

        if !self.ticket_is_current(&pending) {
            debug!(
                round = pending.round,
                sequence = pending.sequence,
                phase = ?self.phase,
                "stale AI turn ignored"
            );
            return false;
        }

        self.run_ai_turn();
        true
    }

    /// `tick` with the coordinator's own clock.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        self.tick(now)
    }

    // =========================================================================
    // Views
    // =========================================================================

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn current_actor(&self) -> Option<Side> {
        self.phase.actor()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    #[must_use]
    pub fn table(&self) -> &TableStack {
        &self.table
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Accepted actions of the round in progress.
    #[must_use]
    pub fn round_log(&self) -> &Vector<ActionRecord> {
        self.round.log()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Seed the deck's RNG was derived from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The armed AI turn, if any.
    #[must_use]
    pub fn pending_ai_turn(&self) -> Option<&PendingTurn> {
        self.timer.pending()
    }

    /// Leaf cards across deck, hands and table. Always equals
    /// [`card_total`](Self::card_total).
    #[must_use]
    pub fn population(&self) -> usize {
        self.deck.population() + self.hands.values().map(Hand::population).sum::<usize>() + self.table.population()
    }

    /// Cards in the match.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.card_total
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn begin_round(&mut self, starter: Side) {
        let number = self.round.number() + 1;
        self.phase = Phase::RoundStart;
        self.round = RoundState::new(number, starter);
        info!(round = number, %starter, "round started");
        self.events.push(GameEvent::RoundStarted { round: number, starter });

        if number == 1 {
            for side in Side::ALL {
                let count = self.hands[side].draw_many(&mut self.deck, self.config.starting_hand_size);
                self.events.push(GameEvent::CardsDrawn { side, count });
            }
        }

        for side in Side::ALL {
            let hand = &mut self.hands[side];
            let mut count = hand.draw_many(&mut self.deck, 1);
            if hand.is_empty() {
                count += hand.draw_many(&mut self.deck, 1);
            }
            self.events.push(GameEvent::CardsDrawn { side, count });
        }

        self.check_population();
        self.enter_acting(starter);
    }

    fn enter_acting(&mut self, side: Side) {
        self.phase = Phase::Acting(side);
        self.events.push(GameEvent::TurnChanged { actor: side });

        if side.is_ai() {
            self.arm_ai_turn();
        }
    }

    /// Arm a ticket stamped with the current round and sequence.
    fn arm_ai_turn(&mut self) {
        let due_at = self.clock.now() + self.config.ai_think_delay;
        self.timer.arm(self.round.number(), self.round.sequence(), due_at);
        debug!(
            round = self.round.number(),
            sequence = self.round.sequence(),
            delay_ms = self.config.ai_think_delay.as_millis() as u64,
            "AI turn armed"
        );
    }

    fn ticket_is_current(&self, pending: &PendingTurn) -> bool {
        self.phase == Phase::Acting(Side::Ai)
            && pending.round == self.round.number()
            && pending.sequence == self.round.sequence()
    }

    fn run_ai_turn(&mut self) {
        let side = Side::Ai;
        let choice = {
            let mut forge = Forge::new(&self.catalog, &mut self.uids);
            self.strategy
                .decide_play(&mut self.hands[side], self.table.top_template(), &mut forge)
        };

        let Some(card) = choice else {
            self.pass_turn(side);
            return;
        };

        if let [a, b] = card.components() {
            let consumed = [a.uid(), b.uid()];
            self.round.record(side, Action::combine(consumed[0], consumed[1], card.uid()));
            self.events.push(GameEvent::CardsCombined {
                side,
                consumed,
                result: card.uid(),
                color: card.color(),
            });
        }

        if !can_play_after(self.table.top_template(), card.template()) {
            self.fail(InvariantViolation::IllegalStrategyPlay { side, card: card.uid() });
        }

        self.place(side, card);
        self.resolve_round(side);
    }

    fn place(&mut self, side: Side, card: CardInstance) {
        let (uid, color) = (card.uid(), card.color());
        debug!(%side, card = %card, "card played");

        self.table.place(card);
        self.round.record(side, Action::Play(uid));
        self.events.push(GameEvent::CardPlayed { side, card: uid, color });
        self.check_population();
    }

    fn pass_turn(&mut self, side: Side) {
        debug!(%side, round = self.round.number(), "side passed");
        self.round.mark_passed(side);
        self.round.record(side, Action::Pass);
        self.events.push(GameEvent::Passed { side });
        self.resolve_round(side);
    }

    /// Continue or settle the round after `last` acted.
    fn resolve_round(&mut self, last: Side) {
        match self.round.evaluate() {
            Ok(RoundOutcome::Contested) => self.enter_acting(last.opponent()),
            Ok(RoundOutcome::Won(winner)) => self.settle(winner),
            Err(violation) => self.fail(violation),
        }
    }

    fn settle(&mut self, winner: Side) {
        self.phase = Phase::RoundSettling;
        self.timer.disarm();

        let coins = self.table.top_value();
        let total = self.scores.award(winner, coins);
        info!(round = self.round.number(), %winner, coins, total, "round settled");
        self.events.push(GameEvent::RoundSettled {
            winner,
            coins_gained: coins,
        });

        for card in self.table.clear() {
            self.deck.discard(card);
        }
        self.check_population();

        match self.scores.leader_at_threshold() {
            Some(champion) => {
                self.phase = Phase::GameOver { winner: champion };
                info!(
                    winner = %champion,
                    player = self.scores.coins(Side::Player),
                    ai = self.scores.coins(Side::Ai),
                    "game over"
                );
                self.events.push(GameEvent::GameOver { winner: champion });
            }
            None => self.begin_round(winner.opponent()),
        }
    }

    fn check_population(&self) {
        let actual = self.population();
        if actual != self.card_total {
            self.fail(InvariantViolation::PopulationMismatch {
                expected: self.card_total,
                actual,
            });
        }
    }

    fn fail(&self, violation: InvariantViolation) -> ! {
        error!(%violation, round = self.round.number(), "invariant violated");
        panic!("{violation}");
    }
}
