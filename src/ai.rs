//! Heuristic computer opponent.
//!
//! Both choices are pure functions of what the opponent can see, so a host
//! can call them whenever it likes and add its own "thinking" delay.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::hand::KEPT_CARDS;
use crate::pegging::{MAX_COUNT, score_play};
use crate::scoring::{fifteens, pairs, runs};

/// Weight of the kept hand against the crib discard.
const HAND_WEIGHT: i32 = 3;

/// Weight per point scored by a pegging play.
const PEG_POINT_WEIGHT: i32 = 10;
/// Resulting counts that hand the other side an easy 15.
const FIFTEEN_TRAPS: [u8; 3] = [5, 10, 11];
/// Resulting count that a ten-card turns into 31.
const THIRTY_ONE_TRAP: u8 = 21;
const TRAP_PENALTY: i32 = 6;
const LATE_COUNT_BONUS: i32 = 3;
const LOW_LEAD_BONUS: i32 = 2;

/// Picks the two cards the opponent lays away to the crib.
///
/// Every one of the fifteen ways to keep four cards is rated as
/// `3 × estimated_hand_value(keep)` plus the crib estimate of the discard
/// when dealing, minus it otherwise. The first best split wins.
#[must_use]
pub fn choose_crib_discards(hand: &[Card; 6], is_dealer: bool) -> [Card; 2] {
    let mut best = [hand[0], hand[1]];
    let mut best_value = i32::MIN;

    for first in 0..hand.len() {
        for second in first + 1..hand.len() {
            let discard = [hand[first], hand[second]];
            let mut keep = [hand[0]; KEPT_CARDS];
            let kept = hand
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != first && i != second)
                .map(|(_, &card)| card);
            for (slot, card) in keep.iter_mut().zip(kept) {
                *slot = card;
            }

            let crib = estimated_crib_value(&discard);
            let value = HAND_WEIGHT * estimated_hand_value(&keep)
                + if is_dealer { crib } else { -crib };

            if value > best_value {
                best_value = value;
                best = discard;
            }
        }
    }

    log::debug!("crib discard {} {} (value {best_value})", best[0], best[1]);
    best
}

/// Rough value of four kept cards before the starter is known.
///
/// Counts the fifteens, pairs and best run the four cards already hold, a
/// four-card flush, and small bonuses for cards that combine well with an
/// unknown starter.
#[must_use]
pub fn estimated_hand_value(keep: &[Card; 4]) -> i32 {
    let mut value = 2 * fifteens(keep).len() as i32;
    value += 2 * pairs(keep).len() as i32;
    value += runs(keep).iter().map(|run| run.len() as i32).sum::<i32>();

    if keep.iter().all(|card| card.suit == keep[0].suit) {
        value += 4;
    }

    for card in keep {
        value += match card.rank {
            Rank::Five => 2,
            Rank::Six | Rank::Seven | Rank::Eight => 1,
            // Nobs hits on a quarter of starters.
            Rank::Jack => 1,
            _ => 0,
        };
    }

    value
}

/// Rough value of two cards laid away to a crib.
#[must_use]
pub fn estimated_crib_value(discard: &[Card; 2]) -> i32 {
    let [a, b] = *discard;
    let sum = a.pip() + b.pip();
    let gap = a.ordinal().abs_diff(b.ordinal());
    let mut value = 0;

    if a.rank == b.rank {
        value += 2;
    }
    if sum == 15 {
        value += 2;
    }
    value += 2 * discard.iter().filter(|card| card.rank == Rank::Five).count() as i32;

    match gap {
        1 => value += 2,
        2 => value += 1,
        _ => {}
    }
    if a.suit == b.suit {
        value += 1;
    }

    // Low cards that make 15 with any ten-card.
    if sum == 5 {
        value += 2;
    } else if a.pip() <= 4 && b.pip() <= 4 {
        value += 1;
    }

    value
}

/// Picks the opponent's next pegging card.
///
/// Returns the index into `hand` of the best legal card, or `None` when no
/// unplayed card fits under 31 and the opponent must say "Go".
/// `opponent_cards_remaining` is how many cards the other side still holds.
#[must_use]
pub fn choose_pegging_card(
    hand: &[Card],
    played: &[bool],
    count: u8,
    pile: &[Card],
    opponent_cards_remaining: usize,
) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    let mut trial: Vec<Card> = Vec::with_capacity(pile.len() + 1);

    for (index, &card) in hand.iter().enumerate() {
        if played.get(index).copied().unwrap_or(false) {
            continue;
        }
        let Some(new_count) = count.checked_add(card.pip()).filter(|&c| c <= MAX_COUNT) else {
            continue;
        };
        trial.clear();
        trial.extend_from_slice(pile);
        trial.push(card);

        let points: i32 = score_play(&trial, new_count)
            .iter()
            .map(|combo| i32::from(combo.points()))
            .sum();
        let mut value = PEG_POINT_WEIGHT * points;

        if FIFTEEN_TRAPS.contains(&new_count) || new_count == THIRTY_ONE_TRAP {
            value -= TRAP_PENALTY;
        }
        if (26..MAX_COUNT).contains(&new_count) {
            value += LATE_COUNT_BONUS;
        }
        if count == 0 && card.pip() < 5 {
            value += LOW_LEAD_BONUS;
        }
        if opponent_cards_remaining <= 1 {
            // Low cards keep the opponent laying cards after the other side
            // runs dry.
            value += (10 - i32::from(card.pip())) / 3;
        }

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((index, value));
        }
    }

    if let Some((index, value)) = best {
        log::debug!("pegging choice {} at count {count} (value {value})", hand[index]);
    }
    best.map(|(index, _)| index)
}
