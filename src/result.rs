//! Reports returned by game commands.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deal::Side;
use crate::pegging::{PeggingCombo, PlayOutcome, ResetOutcome};
use crate::scoring::HandScore;

/// Margin-of-victory classification at game end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skunk {
    /// Plain win.
    None,
    /// Loser finished below the skunk line.
    Single,
    /// Loser finished below the double skunk line.
    Double,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOutcome {
    /// The winning side.
    pub winner: Side,
    /// Skunk status of the loser.
    pub skunk: Skunk,
    /// The player's final score.
    pub player_score: u16,
    /// The opponent's final score.
    pub opponent_score: u16,
}

/// Result of cutting for dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutReport {
    /// The player's deciding cut.
    pub player_card: Card,
    /// The opponent's deciding cut.
    pub opponent_card: Card,
    /// The side that deals first.
    pub dealer: Side,
    /// Tied cuts made before the deciding one, as `(player, opponent)`.
    pub ties: Vec<(Card, Card)>,
}

/// What the end-of-round count is scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CountingStage {
    /// The non-dealer's hand, counted first.
    NonDealerHand,
    /// The dealer's hand.
    DealerHand,
    /// The dealer's crib, counted last.
    Crib,
}

impl CountingStage {
    /// The stage that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::NonDealerHand => Some(Self::DealerHand),
            Self::DealerHand => Some(Self::Crib),
            Self::Crib => None,
        }
    }
}

/// One step of the end-of-round count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountReport {
    /// What was counted.
    pub stage: CountingStage,
    /// Side credited with the points.
    pub side: Side,
    /// The four cards counted.
    pub cards: [Card; 4],
    /// The shared starter.
    pub starter: Card,
    /// Scoring breakdown.
    pub score: HandScore,
}

/// Response to [`Game::proceed_to_next_counting`](crate::Game::proceed_to_next_counting).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CountStep {
    /// A hand or the crib was counted.
    Counted(CountReport),
    /// Counting was finished; a new round is ready to deal.
    NextRound {
        /// Dealer for the new round.
        dealer: Side,
    },
}

/// Move the computer opponent made during pegging.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpponentMove {
    /// The opponent played a card.
    Played(PlayOutcome),
    /// The opponent said "Go".
    Go(Option<ResetOutcome>),
}

/// Why points were scored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreReason {
    /// A pegging play.
    Pegging(Vec<PeggingCombo>),
    /// Last card of a sub-round that stopped short of 31.
    Go,
    /// Last card of the whole pegging phase.
    LastCard,
    /// Starter cut was a Jack.
    HisHeels,
    /// End-of-round hand count.
    Hand,
    /// End-of-round crib count.
    Crib,
}

/// Entry in the per-game score log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreEntry {
    /// Side that scored.
    pub side: Side,
    /// Points scored.
    pub points: u8,
    /// Why they scored.
    pub reason: ScoreReason,
}
