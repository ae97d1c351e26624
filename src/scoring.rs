//! End-of-round hand scoring.
//!
//! A hand is scored as four held cards plus the shared starter. Each scoring
//! combination is reported separately so a caller can show the breakdown.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// Shortest sequence that counts as a run.
pub(crate) const MIN_RUN: usize = 3;

/// One scoring combination found in a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoringCombo {
    /// Cards whose pip values sum to exactly 15.
    Fifteen(Vec<Card>),
    /// Two cards of the same rank.
    Pair([Card; 2]),
    /// One interleaving of the longest run, one card per rank.
    Run(Vec<Card>),
    /// Four or five cards of one suit.
    Flush(Vec<Card>),
    /// A held Jack of the starter's suit.
    Nobs(Card),
}

impl ScoringCombo {
    /// Points this combination is worth.
    #[must_use]
    pub fn points(&self) -> u8 {
        match self {
            Self::Fifteen(_) | Self::Pair(_) => 2,
            Self::Run(cards) | Self::Flush(cards) => cards.len() as u8,
            Self::Nobs(_) => 1,
        }
    }

    /// Cards that make up the combination.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Fifteen(cards) | Self::Run(cards) | Self::Flush(cards) => cards,
            Self::Pair(cards) => cards,
            Self::Nobs(card) => core::slice::from_ref(card),
        }
    }

    /// Short category name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fifteen(_) => "fifteen",
            Self::Pair(_) => "pair",
            Self::Run(_) => "run",
            Self::Flush(_) => "flush",
            Self::Nobs(_) => "nobs",
        }
    }
}

impl fmt::Display for ScoringCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}:", self.label(), self.points())?;
        for card in self.cards() {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// Scored breakdown of a hand or crib.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandScore {
    /// Combinations in scoring order: fifteens, pairs, runs, flush, nobs.
    pub combos: Vec<ScoringCombo>,
}

impl HandScore {
    /// Total points across all combinations.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.combos.iter().map(ScoringCombo::points).sum()
    }

    /// Returns whether nothing scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
}

/// Scores four held cards plus the starter.
///
/// `is_crib` only changes the flush rule: a crib needs all five cards of one
/// suit, while a hand scores four for its own cards and five with the
/// starter.
#[must_use]
pub fn score_hand(hand: &[Card; 4], starter: Card, is_crib: bool) -> HandScore {
    let mut all = [starter; 5];
    all[..4].copy_from_slice(hand);

    let mut combos = Vec::new();
    combos.extend(fifteens(&all).into_iter().map(ScoringCombo::Fifteen));
    combos.extend(pairs(&all).into_iter().map(ScoringCombo::Pair));
    combos.extend(runs(&all).into_iter().map(ScoringCombo::Run));
    if let Some(flush) = flush(hand, starter, is_crib) {
        combos.push(ScoringCombo::Flush(flush));
    }
    combos.extend(
        hand.iter()
            .filter(|card| card.rank == Rank::Jack && card.suit == starter.suit)
            .map(|&card| ScoringCombo::Nobs(card)),
    );

    HandScore { combos }
}

/// Every subset of `cards` whose pips sum to 15, in bitmask order.
pub(crate) fn fifteens(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut found = Vec::new();
    for mask in 1_u32..(1 << cards.len()) {
        let sum: u32 = cards
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, card)| u32::from(card.pip()))
            .sum();
        if sum == 15 {
            found.push(
                cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, &card)| card)
                    .collect(),
            );
        }
    }
    found
}

/// Every two-card combination of equal rank.
pub(crate) fn pairs(cards: &[Card]) -> Vec<[Card; 2]> {
    let mut found = Vec::new();
    for (i, &first) in cards.iter().enumerate() {
        for &second in &cards[i + 1..] {
            if first.rank == second.rank {
                found.push([first, second]);
            }
        }
    }
    found
}

/// Every interleaving of the longest contiguous rank sequence.
///
/// Duplicate ranks inside the sequence multiply it: each choice of one card
/// per rank is its own run. Sequences shorter than the longest never score.
pub(crate) fn runs(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut by_rank: [Vec<Card>; 13] = Default::default();
    for &card in cards {
        by_rank[card.ordinal() as usize].push(card);
    }

    let mut windows = Vec::new();
    let mut start = None;
    for ordinal in 0..=by_rank.len() {
        let present = by_rank.get(ordinal).is_some_and(|group| !group.is_empty());
        match (present, start) {
            (true, None) => start = Some(ordinal),
            (false, Some(first)) => {
                windows.push(first..ordinal);
                start = None;
            }
            _ => {}
        }
    }

    let longest = windows.iter().map(ExactSizeIterator::len).max().unwrap_or(0);
    if longest < MIN_RUN {
        return Vec::new();
    }

    let mut found = Vec::new();
    for window in windows.into_iter().filter(|window| window.len() == longest) {
        let mut partial: Vec<Vec<Card>> = alloc::vec![Vec::with_capacity(longest)];
        for group in &by_rank[window] {
            partial = partial
                .iter()
                .flat_map(|prefix| {
                    group.iter().map(move |&card| {
                        let mut next = prefix.clone();
                        next.push(card);
                        next
                    })
                })
                .collect();
        }
        found.extend(partial);
    }
    found
}

fn flush(hand: &[Card; 4], starter: Card, is_crib: bool) -> Option<Vec<Card>> {
    let suit = hand[0].suit;
    if hand.iter().any(|card| card.suit != suit) {
        return None;
    }

    let mut cards = hand.to_vec();
    if starter.suit == suit {
        cards.push(starter);
        Some(cards)
    } else if is_crib {
        None
    } else {
        Some(cards)
    }
}
