//! The pegging state machine.
//!
//! Sides alternate laying cards on a shared pile while a running count is
//! kept. A sub-round ends when the count hits 31 or neither side can play;
//! the pile is then cleared and the side that did not play last leads again.
//! The machine never ends by itself: the caller stops it once both hands are
//! empty.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deal::Side;
use crate::error::{GoError, PlayError};

pub mod score;

pub use score::{MAX_COUNT, PeggingCombo, score_play};

/// What happened when the pile was cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetOutcome {
    /// The cards that were on the pile.
    pub pile: Vec<Card>,
    /// Whether the sub-round ended on exactly 31.
    pub for_31: bool,
    /// Side awarded the 1-point go, if any.
    pub go_point: Option<Side>,
    /// Side that leads the next sub-round.
    pub next_turn: Side,
}

/// Result of a successful play.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayOutcome {
    /// The side that played.
    pub side: Side,
    /// The card played.
    pub card: Card,
    /// Running count after the play (31 when the play reset the pile).
    pub count: u8,
    /// Scoring events for the play.
    pub combos: Vec<PeggingCombo>,
    /// Set when the play reached 31 and cleared the pile.
    pub reset: Option<ResetOutcome>,
}

impl PlayOutcome {
    /// Points earned by the player of the card.
    #[must_use]
    pub fn points(&self) -> u8 {
        self.combos.iter().map(|combo| combo.points()).sum()
    }
}

/// Result of a successful "Go".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoOutcome {
    /// The other side may still play; the turn passed to them.
    Passed,
    /// Neither side could play; the pile was cleared.
    Reset(ResetOutcome),
}

/// State of the current pegging sub-round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeggingState {
    turn: Side,
    count: u8,
    pile: Vec<Card>,
    consecutive_goes: u8,
    last_player: Option<Side>,
}

impl PeggingState {
    /// Starts pegging with the non-dealer to play.
    #[must_use]
    pub const fn new(non_dealer: Side) -> Self {
        Self {
            turn: non_dealer,
            count: 0,
            pile: Vec::new(),
            consecutive_goes: 0,
            last_player: None,
        }
    }

    /// Side whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Side {
        self.turn
    }

    /// Running count of the current pile.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Cards played since the last reset, oldest first.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Number of goes called since the last play.
    #[must_use]
    pub const fn consecutive_goes(&self) -> u8 {
        self.consecutive_goes
    }

    /// Side that played the most recent card of this sub-round.
    #[must_use]
    pub const fn last_player(&self) -> Option<Side> {
        self.last_player
    }

    /// Returns whether `card` fits under 31 on the current pile.
    #[must_use]
    pub const fn can_play(&self, card: Card) -> bool {
        self.count + card.pip() <= MAX_COUNT
    }

    /// Plays `card` for `side`.
    ///
    /// The play is scored against the new count and pile. Reaching 31 clears
    /// the pile at once and the other side leads; otherwise the turn passes.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not `side`'s turn or the card would push the
    /// count past 31. State is unchanged on error.
    pub fn play(&mut self, side: Side, card: Card) -> Result<PlayOutcome, PlayError> {
        if side != self.turn {
            return Err(PlayError::NotYourTurn);
        }
        if !self.can_play(card) {
            return Err(PlayError::ExceedsThirtyOne);
        }

        self.pile.push(card);
        self.count += card.pip();
        self.last_player = Some(side);
        self.consecutive_goes = 0;

        let count = self.count;
        let combos = score_play(&self.pile, count);

        let reset = if count == MAX_COUNT {
            Some(self.reset(true))
        } else {
            self.turn = side.other();
            None
        };

        Ok(PlayOutcome {
            side,
            card,
            count,
            combos,
            reset,
        })
    }

    /// Calls "Go" for `side`, which has no legal play.
    ///
    /// When the other side can still play the turn simply passes. When it
    /// cannot, the pile is cleared and the last side to play scores the go.
    ///
    /// # Errors
    ///
    /// Returns [`GoError::NotYourTurn`] if it is not `side`'s turn.
    pub fn go(&mut self, side: Side, opponent_has_legal_move: bool) -> Result<GoOutcome, GoError> {
        if side != self.turn {
            return Err(GoError::NotYourTurn);
        }

        self.consecutive_goes += 1;
        if opponent_has_legal_move {
            self.turn = side.other();
            Ok(GoOutcome::Passed)
        } else {
            Ok(GoOutcome::Reset(self.reset(false)))
        }
    }

    fn reset(&mut self, for_31: bool) -> ResetOutcome {
        let go_point = if for_31 { None } else { self.last_player };
        let next_turn = self.last_player.unwrap_or(self.turn).other();

        let pile = core::mem::take(&mut self.pile);
        self.count = 0;
        self.consecutive_goes = 0;
        self.last_player = None;
        self.turn = next_turn;

        ResetOutcome {
            pile,
            for_31,
            go_point,
            next_turn,
        }
    }
}
