//! Cut for dealer and the opening deal.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, Deck};
use crate::error::DealError;

/// Cards dealt to each side before discarding to the crib.
pub const HAND_SIZE: usize = 6;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Side {
    /// Returns the other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Result of comparing the two cut cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CutOutcome {
    /// The player cut lower and deals.
    Player,
    /// The opponent cut lower and deals.
    Opponent,
    /// Equal ranks; both sides cut again.
    Tie,
}

impl CutOutcome {
    /// Returns the dealing side, or `None` on a tie.
    #[must_use]
    pub const fn dealer(self) -> Option<Side> {
        match self {
            Self::Player => Some(Side::Player),
            Self::Opponent => Some(Side::Opponent),
            Self::Tie => None,
        }
    }
}

/// Decides the dealer from the two cut cards.
///
/// The lower rank ordinal deals. Suits are ignored, so equal ranks are a
/// [`CutOutcome::Tie`] and the caller must cut again.
#[must_use]
pub fn determine_dealer(player_cut: Card, opponent_cut: Card) -> CutOutcome {
    match player_cut.ordinal().cmp(&opponent_cut.ordinal()) {
        Ordering::Less => CutOutcome::Player,
        Ordering::Greater => CutOutcome::Opponent,
        Ordering::Equal => CutOutcome::Tie,
    }
}

/// Deals six cards to each side, one at a time, non-dealer first.
///
/// Exactly twelve cards are taken from the head of `deck`; the rest stay in
/// place for the starter cut. Returns `(player_hand, opponent_hand)`.
///
/// # Errors
///
/// Returns [`DealError::NotEnoughCards`] if the deck holds fewer than twelve
/// cards. The deck is left untouched in that case.
pub fn deal_six_each(deck: &mut Deck, dealer: Side) -> Result<(Vec<Card>, Vec<Card>), DealError> {
    if deck.len() < HAND_SIZE * 2 {
        return Err(DealError::NotEnoughCards);
    }

    let mut player = Vec::with_capacity(HAND_SIZE);
    let mut opponent = Vec::with_capacity(HAND_SIZE);

    for _ in 0..HAND_SIZE {
        for side in [dealer.other(), dealer] {
            let card = deck.draw().ok_or(DealError::NotEnoughCards)?;
            match side {
                Side::Player => player.push(card),
                Side::Opponent => opponent.push(card),
            }
        }
    }

    Ok((player, opponent))
}
