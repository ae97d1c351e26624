//! Points for a single pegging play.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::scoring::MIN_RUN;

/// Highest legal running count.
pub const MAX_COUNT: u8 = 31;

/// One scoring event caused by a pegging play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeggingCombo {
    /// The count reached exactly 15.
    Fifteen,
    /// The count reached exactly 31.
    ThirtyOne,
    /// The last `n` cards share a rank (pair, pair royal, double pair royal).
    Pairs(u8),
    /// The last `n` cards form a run in some order.
    Run(u8),
}

impl PeggingCombo {
    /// Points this event is worth.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Fifteen | Self::ThirtyOne => 2,
            Self::Pairs(2) => 2,
            Self::Pairs(3) => 6,
            Self::Pairs(n) if n >= 4 => 12,
            Self::Pairs(_) => 0,
            Self::Run(n) => n,
        }
    }
}

impl fmt::Display for PeggingCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifteen => f.write_str("fifteen for 2"),
            Self::ThirtyOne => f.write_str("thirty-one for 2"),
            Self::Pairs(n) => write!(f, "{n} of a kind for {}", self.points()),
            Self::Run(n) => write!(f, "run of {n} for {n}"),
        }
    }
}

/// Scores the play that just landed on top of `pile`.
///
/// `count` is the running count after the play. Only the newest card is
/// scored; earlier plays were scored when they were made.
#[must_use]
pub fn score_play(pile: &[Card], count: u8) -> Vec<PeggingCombo> {
    let mut combos = Vec::new();

    match count {
        15 => combos.push(PeggingCombo::Fifteen),
        MAX_COUNT => combos.push(PeggingCombo::ThirtyOne),
        _ => {}
    }

    let Some(last) = pile.last() else {
        return combos;
    };

    let matching = pile
        .iter()
        .rev()
        .take_while(|card| card.rank == last.rank)
        .count();
    if matching >= 2 {
        combos.push(PeggingCombo::Pairs(matching.min(4) as u8));
    }

    if let Some(len) = trailing_run(pile) {
        combos.push(PeggingCombo::Run(len as u8));
    }

    combos
}

/// Length of the longest trailing window that forms a run.
///
/// A window with a repeated rank is never a run, whatever its size.
fn trailing_run(pile: &[Card]) -> Option<usize> {
    (MIN_RUN..=pile.len()).rev().find(|&len| {
        let mut ordinals: Vec<u8> = pile[pile.len() - len..]
            .iter()
            .map(|card| card.ordinal())
            .collect();
        ordinals.sort_unstable();
        ordinals.windows(2).all(|pair| pair[1] == pair[0] + 1)
    })
}
