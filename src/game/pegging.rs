use crate::ai;
use crate::deal::Side;
use crate::error::{GoError, PlayError};
use crate::pegging::{GoOutcome, MAX_COUNT, PlayOutcome, ResetOutcome};
use crate::result::{OpponentMove, ScoreReason};
use crate::stats::StatsStore;

use super::{Game, GameState};

impl<S: StatsStore> Game<S> {
    fn ensure_pegging_turn(&self, side: Side) -> Result<(), PlayError> {
        if self.state != GameState::Pegging {
            return Err(PlayError::InvalidState);
        }
        if self.pending_reset.is_some() {
            return Err(PlayError::ResetPending);
        }
        if self.pegging.turn() != side {
            return Err(PlayError::NotYourTurn);
        }
        Ok(())
    }

    /// Plays the player's card at `index` onto the pile.
    ///
    /// Points for the play are credited at once. If the play reaches 31 the
    /// pile is cleared and the reset must be acknowledged before pegging
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not pegging, a reset is pending, it is
    /// not the player's turn, the card does not exist or was already played,
    /// or the card would push the count past 31.
    pub fn play_card(&mut self, index: usize) -> Result<PlayOutcome, PlayError> {
        self.ensure_pegging_turn(Side::Player)?;
        self.play_for(Side::Player, index)
    }

    /// Says "Go" for the player, who has no card that fits under 31.
    ///
    /// Returns the pile reset if neither side could play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not pegging, a reset is pending, it is
    /// not the player's turn, or the player still has a legal card.
    pub fn go(&mut self) -> Result<Option<ResetOutcome>, GoError> {
        self.ensure_pegging_turn(Side::Player).map_err(|err| match err {
            PlayError::ResetPending => GoError::ResetPending,
            PlayError::NotYourTurn => GoError::NotYourTurn,
            _ => GoError::InvalidState,
        })?;
        if self.player_hand.has_legal_play(self.pegging.count(), MAX_COUNT) {
            return Err(GoError::HasLegalPlay);
        }
        Ok(self.go_for(Side::Player))
    }

    /// Lets the computer opponent take its pegging turn.
    ///
    /// The opponent plays its best legal card or says "Go". Hosts that want
    /// a visible pause should wait before calling this.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not pegging, a reset is pending, or it
    /// is not the opponent's turn.
    pub fn opponent_move(&mut self) -> Result<OpponentMove, PlayError> {
        self.ensure_pegging_turn(Side::Opponent)?;

        let choice = ai::choose_pegging_card(
            self.opponent_hand.cards(),
            self.opponent_hand.played(),
            self.pegging.count(),
            self.pegging.pile(),
            self.player_hand.unplayed_count(),
        );

        match choice {
            Some(index) => self.play_for(Side::Opponent, index).map(OpponentMove::Played),
            None => Ok(OpponentMove::Go(self.go_for(Side::Opponent))),
        }
    }

    /// Clears a pending pile reset so pegging can continue.
    ///
    /// # Errors
    ///
    /// Returns an error if no reset is pending.
    pub fn acknowledge_reset(&mut self) -> Result<ResetOutcome, PlayError> {
        if !matches!(self.state, GameState::Pegging | GameState::HandCounting) {
            return Err(PlayError::InvalidState);
        }
        self.pending_reset.take().ok_or(PlayError::InvalidState)
    }

    fn play_for(&mut self, side: Side, index: usize) -> Result<PlayOutcome, PlayError> {
        let hand = self.hand(side);
        let card = hand.get(index).ok_or(PlayError::CardNotFound)?;
        if hand.is_played(index) {
            return Err(PlayError::AlreadyPlayed);
        }

        let outcome = self.pegging.play(side, card)?;
        self.hand_mut(side).mark_played(index);
        log::debug!("{side:?} plays {card} for {}", outcome.count);

        let points = outcome.points();
        if self.award(side, points, ScoreReason::Pegging(outcome.combos.clone())) {
            return Ok(outcome);
        }
        if let Some(reset) = &outcome.reset {
            self.pending_reset = Some(reset.clone());
        }

        self.settle_pegging();
        Ok(outcome)
    }

    fn go_for(&mut self, side: Side) -> Option<ResetOutcome> {
        let count = self.pegging.count();
        let other_can_play = self.hand(side.other()).has_legal_play(count, MAX_COUNT);

        let reset = match self.pegging.go(side, other_can_play) {
            Ok(GoOutcome::Reset(reset)) => {
                self.record_reset(reset.clone());
                Some(reset)
            }
            Ok(GoOutcome::Passed) => None,
            Err(err) => {
                log::warn!("{side:?} go rejected at {count}: {err}");
                None
            }
        };
        log::debug!("{side:?} says go at {count}");

        self.settle_pegging();
        reset
    }

    /// Scores the go point for a cleared pile and holds it for display.
    fn record_reset(&mut self, reset: ResetOutcome) {
        let finished =
            self.player_hand.unplayed_count() == 0 && self.opponent_hand.unplayed_count() == 0;
        if let Some(side) = reset.go_point {
            let reason = if finished {
                ScoreReason::LastCard
            } else {
                ScoreReason::Go
            };
            self.award(side, 1, reason);
        }
        self.pending_reset = Some(reset);
    }

    /// Runs the automatic steps after a pegging action.
    ///
    /// A side with no cards left passes without being asked. Once both hands
    /// are empty the last card is scored and counting begins.
    fn settle_pegging(&mut self) {
        while self.state == GameState::Pegging {
            let player_left = self.player_hand.unplayed_count();
            let opponent_left = self.opponent_hand.unplayed_count();
            let turn = self.pegging.turn();

            if player_left == 0 && opponent_left == 0 {
                if !self.pegging.pile().is_empty() {
                    match self.pegging.go(turn, false) {
                        Ok(GoOutcome::Reset(reset)) => self.record_reset(reset),
                        Ok(GoOutcome::Passed) => {}
                        Err(err) => log::warn!("final go for {turn:?} rejected: {err}"),
                    }
                }
                if self.state == GameState::Pegging {
                    self.state = GameState::HandCounting;
                    log::debug!("pegging finished");
                }
                return;
            }

            if self.hand(turn).unplayed_count() > 0 {
                return;
            }

            let other_can_play = self
                .hand(turn.other())
                .has_legal_play(self.pegging.count(), MAX_COUNT);
            match self.pegging.go(turn, other_can_play) {
                Ok(GoOutcome::Reset(reset)) => self.record_reset(reset),
                Ok(GoOutcome::Passed) => {}
                Err(err) => {
                    log::warn!("automatic go for {turn:?} rejected: {err}");
                    return;
                }
            }
        }
    }
}
