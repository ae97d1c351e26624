//! Cards held by one side during a round.

use alloc::vec::Vec;

use crate::card::Card;

/// Cards each side keeps after discarding to the crib.
pub const KEPT_CARDS: usize = 4;

/// A side's hand.
///
/// Cards stay in the hand while they are pegged so the hand can still be
/// counted afterwards; pegged cards are tracked with a played flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Parallel to `cards`: whether each card has been pegged.
    played: Vec<bool>,
    /// Indices picked for the crib, at most two.
    selected: Vec<usize>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            played: Vec::new(),
            selected: Vec::new(),
        }
    }

    /// Creates a hand holding `cards`, none of them played.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let played = alloc::vec![false; cards.len()];
        Self {
            cards,
            played,
            selected: Vec::new(),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the played flags, parallel to [`Hand::cards`].
    #[must_use]
    pub fn played(&self) -> &[bool] {
        &self.played
    }

    /// Returns the indices selected for the crib.
    #[must_use]
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns whether the card at `index` has been played.
    #[must_use]
    pub fn is_played(&self, index: usize) -> bool {
        self.played.get(index).copied().unwrap_or(false)
    }

    /// Marks the card at `index` as played.
    pub fn mark_played(&mut self, index: usize) {
        if let Some(flag) = self.played.get_mut(index) {
            *flag = true;
        }
    }

    /// Number of cards not yet played.
    #[must_use]
    pub fn unplayed_count(&self) -> usize {
        self.played.iter().filter(|&&played| !played).count()
    }

    /// Returns whether some unplayed card fits under `limit` on `count`.
    #[must_use]
    pub fn has_legal_play(&self, count: u8, limit: u8) -> bool {
        self.cards
            .iter()
            .zip(&self.played)
            .any(|(card, &played)| {
                !played && count.checked_add(card.pip()).is_some_and(|c| c <= limit)
            })
    }

    /// Toggles `index` in the crib selection.
    ///
    /// Returns `false` without changing anything if the index is out of range
    /// or two other cards are already selected.
    pub fn toggle_selected(&mut self, index: usize) -> bool {
        if index >= self.cards.len() {
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
            return true;
        }
        if self.selected.len() >= 2 {
            return false;
        }
        self.selected.push(index);
        true
    }

    /// Removes the selected cards and returns them in selection order.
    pub fn take_selected(&mut self) -> Vec<Card> {
        let mut indices = core::mem::take(&mut self.selected);
        let taken = indices.iter().map(|&i| self.cards[i]).collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for i in indices {
            self.cards.remove(i);
            self.played.remove(i);
        }
        taken
    }

    /// Removes `card` from the hand. Returns whether it was present.
    pub fn remove(&mut self, card: Card) -> bool {
        let Some(pos) = self.cards.iter().position(|&c| c == card) else {
            return false;
        };
        self.cards.remove(pos);
        self.played.remove(pos);
        self.selected.clear();
        true
    }

    /// Returns the four kept cards, or `None` if the hand is not four cards.
    #[must_use]
    pub fn kept(&self) -> Option<[Card; KEPT_CARDS]> {
        self.cards.as_slice().try_into().ok()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.played.clear();
        self.selected.clear();
    }
}
