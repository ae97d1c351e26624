//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Deck};
use crate::deal::Side;
use crate::error::SetupError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pegging::{PeggingState, ResetOutcome};
use crate::result::{CountReport, CountingStage, GameOutcome, ScoreEntry, ScoreReason, Skunk};
use crate::stats::{MatchStats, MemoryStatsStore, StatsStore};

mod counting;
mod deal;
mod pegging;
pub mod state;

pub use state::{GameSnapshot, GameState};

/// A cribbage game between the player and the computer opponent.
///
/// The game owns the deck, both hands, the crib, the pegging pile and the
/// scores. Every command checks the current [`GameState`] and returns an
/// error instead of changing anything when it is called out of turn.
/// Statistics are loaded from the [`StatsStore`] at construction and saved
/// whenever a game ends.
#[derive(Debug)]
pub struct Game<S: StatsStore = MemoryStatsStore> {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
    /// Persistence for statistics and cut cards.
    store: S,
    /// Cumulative statistics.
    stats: MatchStats,
    /// The cut that decided the first dealer.
    cut_cards: Option<(Card, Card)>,
    /// Cards left after the deal; the starter is cut from here.
    deck: Deck,
    /// Dealer for the current round.
    dealer: Option<Side>,
    player_hand: Hand,
    opponent_hand: Hand,
    crib: Vec<Card>,
    starter: Option<Card>,
    pegging: PeggingState,
    /// Pile reset held until the host acknowledges it.
    pending_reset: Option<ResetOutcome>,
    /// Last counting stage scored.
    counting: Option<CountingStage>,
    last_count: Option<CountReport>,
    player_score: u16,
    opponent_score: u16,
    outcome: Option<GameOutcome>,
    score_log: Vec<ScoreEntry>,
}

impl Game<MemoryStatsStore> {
    /// Creates a new game with the given seed and an in-memory store.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cribrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_store(options, seed, MemoryStatsStore::new())
    }
}

impl<S: StatsStore> Game<S> {
    /// Creates a new game with the given seed and statistics store.
    ///
    /// Saved statistics and cut cards are loaded right away. A store that
    /// fails to load is logged and treated as empty.
    #[must_use]
    pub fn with_store(options: GameOptions, seed: u64, store: S) -> Self {
        let stats = store.load_stats().unwrap_or_else(|err| {
            log::warn!("failed to load match statistics: {err}");
            MatchStats::default()
        });
        let cut_cards = store.load_cut_cards().unwrap_or_else(|err| {
            log::warn!("failed to load cut cards: {err}");
            None
        });

        Self {
            options,
            state: GameState::Setup,
            rng: ChaCha8Rng::seed_from_u64(seed),
            store,
            stats,
            cut_cards,
            deck: Deck::new(),
            dealer: None,
            player_hand: Hand::new(),
            opponent_hand: Hand::new(),
            crib: Vec::new(),
            starter: None,
            pegging: PeggingState::new(Side::Player),
            pending_reset: None,
            counting: None,
            last_count: None,
            player_score: 0,
            opponent_score: 0,
            outcome: None,
            score_log: Vec::new(),
        }
    }

    /// Starts a new game: scores are zeroed and the dealer is cut for.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is in the `Setup` state.
    pub fn start_game(&mut self) -> Result<(), SetupError> {
        if self.state != GameState::Setup {
            return Err(SetupError::InvalidState);
        }

        self.clear_round();
        self.dealer = None;
        self.player_score = 0;
        self.opponent_score = 0;
        self.outcome = None;
        self.score_log.clear();
        self.state = GameState::CutForDealer;
        log::info!("game started");

        Ok(())
    }

    /// Closes the winner announcement and returns to `Setup`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is over.
    pub fn dismiss_winner_modal(&mut self) -> Result<(), SetupError> {
        if self.state != GameState::GameOver {
            return Err(SetupError::InvalidState);
        }
        self.state = GameState::Setup;
        Ok(())
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the dealer for the current round.
    pub const fn dealer(&self) -> Option<Side> {
        self.dealer
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the opponent's hand.
    pub const fn opponent_hand(&self) -> &Hand {
        &self.opponent_hand
    }

    /// Returns the crib.
    pub fn crib(&self) -> &[Card] {
        &self.crib
    }

    /// Returns the starter card, once cut.
    pub const fn starter(&self) -> Option<Card> {
        self.starter
    }

    /// Returns the pegging state.
    pub const fn pegging(&self) -> &PeggingState {
        &self.pegging
    }

    /// Returns the pile reset waiting to be acknowledged.
    pub const fn pending_reset(&self) -> Option<&ResetOutcome> {
        self.pending_reset.as_ref()
    }

    /// Returns the score for `side`.
    pub const fn score(&self, side: Side) -> u16 {
        match side {
            Side::Player => self.player_score,
            Side::Opponent => self.opponent_score,
        }
    }

    /// Returns the result once the game is over.
    pub const fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Returns the cumulative match statistics.
    pub const fn stats(&self) -> MatchStats {
        self.stats
    }

    /// Returns the statistics store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns every score made this game, oldest first.
    pub fn score_log(&self) -> &[ScoreEntry] {
        &self.score_log
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns a read-only copy of the table.
    pub fn snapshot(&self) -> GameSnapshot {
        let pegging_active = self.state == GameState::Pegging;
        GameSnapshot {
            state: self.state,
            dealer: self.dealer,
            player_hand: self.player_hand.cards().to_vec(),
            player_played: self.player_hand.played().to_vec(),
            player_selected: self.player_hand.selected().to_vec(),
            opponent_hand: self.opponent_hand.cards().to_vec(),
            opponent_played: self.opponent_hand.played().to_vec(),
            crib: self.crib.clone(),
            starter: self.starter,
            pile: self.pegging.pile().to_vec(),
            count: self.pegging.count(),
            turn: pegging_active.then(|| self.pegging.turn()),
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            pending_reset: self.pending_reset.clone(),
            counting: self.counting,
            last_count: self.last_count.clone(),
            outcome: self.outcome,
            stats: self.stats,
            cut_cards: self.cut_cards,
            score_log: self.score_log.clone(),
        }
    }

    const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Opponent => &self.opponent_hand,
        }
    }

    const fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Opponent => &mut self.opponent_hand,
        }
    }

    /// Clears the cards and per-round bookkeeping.
    fn clear_round(&mut self) {
        self.player_hand.clear();
        self.opponent_hand.clear();
        self.crib.clear();
        self.starter = None;
        self.pending_reset = None;
        self.counting = None;
        self.last_count = None;
        self.pegging = PeggingState::new(self.dealer.map_or(Side::Player, Side::other));
    }

    /// Credits `points` to `side` and ends the game if it reached the
    /// winning score.
    ///
    /// Returns `true` if the game is over.
    fn award(&mut self, side: Side, points: u8, reason: ScoreReason) -> bool {
        if self.state == GameState::GameOver {
            return true;
        }
        if points == 0 {
            return false;
        }

        let winning = self.options.winning_score;
        let score = match side {
            Side::Player => &mut self.player_score,
            Side::Opponent => &mut self.opponent_score,
        };
        *score = (*score + u16::from(points)).min(winning);
        let reached = *score >= winning;

        log::debug!("{side:?} scores {points} ({reason:?})");
        self.score_log.push(ScoreEntry {
            side,
            points,
            reason,
        });

        if reached {
            self.finish_game(side);
        }
        reached
    }

    fn finish_game(&mut self, winner: Side) {
        let loser_score = self.score(winner.other());
        let skunk = if loser_score < self.options.double_skunk_line {
            Skunk::Double
        } else if loser_score < self.options.skunk_line {
            Skunk::Single
        } else {
            Skunk::None
        };

        let outcome = GameOutcome {
            winner,
            skunk,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
        };
        self.outcome = Some(outcome);
        self.state = GameState::GameOver;

        self.stats.record(winner == Side::Player, skunk);
        if let Err(err) = self.store.save_stats(&self.stats) {
            log::warn!("failed to save match statistics: {err}");
        }

        log::info!(
            "game over: {winner:?} wins {}-{} ({skunk:?})",
            self.score(winner),
            loser_score
        );
    }
}
