//! A two-player cribbage rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full match flow: cut for
//! dealer, the deal, crib discards, pegging, and the end-of-round count. The
//! scoring rules, the pegging state machine and the computer opponent are
//! also usable on their own.
//!
//! # Example
//!
//! ```no_run
//! use cribrs::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod card;
pub mod deal;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pegging;
pub mod result;
pub mod scoring;
pub mod stats;

// Re-export main types
pub use ai::{choose_crib_discards, choose_pegging_card};
pub use card::{Card, DECK_SIZE, Deck, Rank, Suit};
pub use deal::{CutOutcome, Side, deal_six_each, determine_dealer};
pub use error::{
    CountError, CribError, CutError, DealError, GoError, PlayError, SetupError, StatsError,
};
pub use game::{Game, GameSnapshot, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use pegging::{GoOutcome, PeggingCombo, PeggingState, PlayOutcome, ResetOutcome, score_play};
pub use result::{
    CountReport, CountStep, CountingStage, CutReport, GameOutcome, OpponentMove, ScoreEntry,
    ScoreReason, Skunk,
};
pub use scoring::{HandScore, ScoringCombo, score_hand};
pub use stats::{MatchStats, MemoryStatsStore, StatsStore};
