//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting or closing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Invalid game state for this command.
    #[error("invalid game state for setup")]
    InvalidState,
}

/// Errors that can occur while cutting for dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutError {
    /// Invalid game state for cutting.
    #[error("invalid game state for cutting")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Fewer than twelve cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur while choosing crib discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CribError {
    /// Invalid game state for crib selection.
    #[error("invalid game state for crib selection")]
    InvalidState,
    /// Card index is outside the hand.
    #[error("card index out of range")]
    CardNotFound,
    /// Two cards are already selected.
    #[error("two cards are already selected")]
    SelectionFull,
    /// Exactly two cards must be selected.
    #[error("exactly two cards must be selected")]
    IncompleteSelection,
    /// No cards left to cut the starter from.
    #[error("no cards left to cut the starter")]
    NoStarter,
}

/// Errors that can occur when playing a card during pegging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a card.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// A pile reset is waiting to be acknowledged.
    #[error("a pile reset is waiting to be acknowledged")]
    ResetPending,
    /// Not this side's turn.
    #[error("not this side's turn")]
    NotYourTurn,
    /// Card index is outside the hand.
    #[error("card not found")]
    CardNotFound,
    /// Card has already been played.
    #[error("card has already been played")]
    AlreadyPlayed,
    /// Playing the card would push the count past 31.
    #[error("count would exceed 31")]
    ExceedsThirtyOne,
}

/// Errors that can occur when calling "Go".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GoError {
    /// Invalid game state for calling go.
    #[error("invalid game state for calling go")]
    InvalidState,
    /// A pile reset is waiting to be acknowledged.
    #[error("a pile reset is waiting to be acknowledged")]
    ResetPending,
    /// Not this side's turn.
    #[error("not this side's turn")]
    NotYourTurn,
    /// The side still has a legal play.
    #[error("a legal play is available")]
    HasLegalPlay,
}

/// Errors that can occur while counting hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    /// Invalid game state for counting.
    #[error("invalid game state for counting")]
    InvalidState,
    /// A hand or the crib does not hold four cards.
    #[error("hand does not hold four cards")]
    MalformedHand,
    /// No starter card has been cut.
    #[error("no starter card")]
    NoStarter,
}

/// Errors reported by a [`StatsStore`](crate::stats::StatsStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The backing store could not be read or written.
    #[error("statistics store unavailable")]
    Unavailable,
    /// Stored data could not be decoded.
    #[error("stored statistics are corrupt")]
    Corrupt,
}
