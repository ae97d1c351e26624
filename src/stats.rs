//! Match statistics and the persistence seam.

use crate::card::Card;
use crate::error::StatsError;
use crate::result::Skunk;

/// Cumulative results across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchStats {
    /// Games the player won.
    pub games_won: u32,
    /// Games the player lost.
    pub games_lost: u32,
    /// Skunks (single or double) the player inflicted.
    pub skunks_for: u32,
    /// Skunks (single or double) the player suffered.
    pub skunks_against: u32,
}

impl MatchStats {
    /// Records a finished game from the player's point of view.
    pub const fn record(&mut self, player_won: bool, skunk: Skunk) {
        let skunked = !matches!(skunk, Skunk::None);
        if player_won {
            self.games_won += 1;
            if skunked {
                self.skunks_for += 1;
            }
        } else {
            self.games_lost += 1;
            if skunked {
                self.skunks_against += 1;
            }
        }
    }

    /// Total games recorded.
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_won + self.games_lost
    }
}

/// Storage for match statistics and the last cut for dealer.
///
/// The host platform supplies the implementation; the engine only calls it at
/// construction, after each cut for dealer, and at game over.
pub trait StatsStore {
    /// Loads the saved statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds bad data.
    fn load_stats(&self) -> Result<MatchStats, StatsError>;

    /// Saves the statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save_stats(&mut self, stats: &MatchStats) -> Result<(), StatsError>;

    /// Loads the most recent cut cards as `(player, opponent)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds bad data.
    fn load_cut_cards(&self) -> Result<Option<(Card, Card)>, StatsError>;

    /// Saves the cut cards that decided the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save_cut_cards(&mut self, player: Card, opponent: Card) -> Result<(), StatsError>;
}

/// In-memory [`StatsStore`].
///
/// Cut cards are kept in the same `(rank ordinal, suit ordinal)` form a
/// key-value backend would use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStatsStore {
    stats: MatchStats,
    cut_cards: Option<[(u8, u8); 2]>,
}

impl MemoryStatsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing statistics.
    #[must_use]
    pub const fn with_stats(stats: MatchStats) -> Self {
        Self {
            stats,
            cut_cards: None,
        }
    }
}

impl StatsStore for MemoryStatsStore {
    fn load_stats(&self) -> Result<MatchStats, StatsError> {
        Ok(self.stats)
    }

    fn save_stats(&mut self, stats: &MatchStats) -> Result<(), StatsError> {
        self.stats = *stats;
        Ok(())
    }

    fn load_cut_cards(&self) -> Result<Option<(Card, Card)>, StatsError> {
        let Some([(pr, ps), (or, os)]) = self.cut_cards else {
            return Ok(None);
        };
        let player = Card::from_ordinals(pr, ps).ok_or(StatsError::Corrupt)?;
        let opponent = Card::from_ordinals(or, os).ok_or(StatsError::Corrupt)?;
        Ok(Some((player, opponent)))
    }

    fn save_cut_cards(&mut self, player: Card, opponent: Card) -> Result<(), StatsError> {
        self.cut_cards = Some([player.ordinals(), opponent.ordinals()]);
        Ok(())
    }
}
