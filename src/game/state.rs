//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deal::Side;
use crate::pegging::ResetOutcome;
use crate::result::{CountReport, CountingStage, GameOutcome, ScoreEntry};
use crate::stats::MatchStats;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// No game in progress.
    Setup,
    /// Waiting for the cut that decides the first dealer.
    CutForDealer,
    /// Waiting to deal the next round.
    Dealing,
    /// Each side lays two cards away to the crib.
    CribSelection,
    /// Sides alternate playing cards onto the pile.
    Pegging,
    /// Hands and crib are counted one at a time.
    HandCounting,
    /// A side reached the winning score.
    GameOver,
}

/// Read-only copy of everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    /// Current phase.
    pub state: GameState,
    /// Dealer for the current round.
    pub dealer: Option<Side>,
    /// The player's cards.
    pub player_hand: Vec<Card>,
    /// Which of the player's cards have been pegged.
    pub player_played: Vec<bool>,
    /// Indices the player has selected for the crib.
    pub player_selected: Vec<usize>,
    /// The opponent's cards (the host decides what to reveal).
    pub opponent_hand: Vec<Card>,
    /// Which of the opponent's cards have been pegged.
    pub opponent_played: Vec<bool>,
    /// The crib.
    pub crib: Vec<Card>,
    /// The starter, once cut.
    pub starter: Option<Card>,
    /// Cards on the pegging pile.
    pub pile: Vec<Card>,
    /// Running count.
    pub count: u8,
    /// Side to act during pegging.
    pub turn: Option<Side>,
    /// The player's score.
    pub player_score: u16,
    /// The opponent's score.
    pub opponent_score: u16,
    /// Pile reset waiting to be acknowledged.
    pub pending_reset: Option<ResetOutcome>,
    /// Last counting stage scored this round.
    pub counting: Option<CountingStage>,
    /// Report for the last counting stage.
    pub last_count: Option<CountReport>,
    /// Result once the game is over.
    pub outcome: Option<GameOutcome>,
    /// Cumulative match statistics.
    pub stats: MatchStats,
    /// The cut that decided the first dealer, as `(player, opponent)`.
    pub cut_cards: Option<(Card, Card)>,
    /// Every score made this game, oldest first.
    pub score_log: Vec<ScoreEntry>,
}
