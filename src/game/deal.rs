use alloc::vec::Vec;

use crate::ai;
use crate::card::{Card, Deck, Rank};
use crate::deal::{HAND_SIZE, Side, deal_six_each, determine_dealer};
use crate::error::{CribError, CutError, DealError};
use crate::hand::Hand;
use crate::pegging::PeggingState;
use crate::result::{CutReport, ScoreReason};
use crate::stats::StatsStore;

use super::{Game, GameState};

impl<S: StatsStore> Game<S> {
    /// Cuts for the first dealer.
    ///
    /// Each side cuts a card from a shuffled deck and the lower rank deals.
    /// Ties are cut again with two fresh cards until they differ; a fresh
    /// deck is shuffled if the cut deck runs out. The deciding cards are
    /// saved to the statistics store.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for the cut.
    pub fn cut_for_dealer(&mut self) -> Result<CutReport, CutError> {
        if self.state != GameState::CutForDealer {
            return Err(CutError::InvalidState);
        }

        let mut deck = Deck::shuffled(&mut self.rng);
        let mut ties = Vec::new();

        let (player_card, opponent_card, dealer) = loop {
            let (Some(player_card), Some(opponent_card)) = (deck.draw(), deck.draw()) else {
                deck = Deck::shuffled(&mut self.rng);
                continue;
            };
            match determine_dealer(player_card, opponent_card).dealer() {
                Some(dealer) => break (player_card, opponent_card, dealer),
                None => {
                    log::debug!("cut tied: {player_card} vs {opponent_card}");
                    ties.push((player_card, opponent_card));
                }
            }
        };

        if let Err(err) = self.store.save_cut_cards(player_card, opponent_card) {
            log::warn!("failed to save cut cards: {err}");
        }
        self.cut_cards = Some((player_card, opponent_card));
        self.dealer = Some(dealer);
        self.state = GameState::Dealing;
        log::info!("{dealer:?} deals first ({player_card} vs {opponent_card})");

        Ok(CutReport {
            player_card,
            opponent_card,
            dealer,
            ties,
        })
    }

    /// Deals a new round from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting to deal.
    pub fn deal_cards(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_from(deck)
    }

    /// Deals a new round from `deck`, whose head card is dealt first.
    ///
    /// Useful for replays and arranged deals. The starter is later cut from
    /// whatever remains after the twelve dealt cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting to deal or the deck holds
    /// fewer than thirteen cards (twelve dealt plus the starter).
    pub fn deal_from(&mut self, mut deck: Deck) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }
        let dealer = self.dealer.ok_or(DealError::InvalidState)?;
        if deck.len() <= 2 * HAND_SIZE {
            return Err(DealError::NotEnoughCards);
        }

        let (player, opponent) = deal_six_each(&mut deck, dealer)?;

        self.clear_round();
        self.player_hand = Hand::from_cards(player);
        self.opponent_hand = Hand::from_cards(opponent);
        self.deck = deck;
        self.state = GameState::CribSelection;
        log::debug!("dealt round, {dealer:?} dealing");

        Ok(())
    }

    /// Toggles the player's crib selection for the card at `index`.
    ///
    /// Returns whether the card is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in crib selection, the index is
    /// out of range, or two other cards are already selected.
    pub fn toggle_card_selection(&mut self, index: usize) -> Result<bool, CribError> {
        if self.state != GameState::CribSelection {
            return Err(CribError::InvalidState);
        }
        if index >= self.player_hand.len() {
            return Err(CribError::CardNotFound);
        }
        if !self.player_hand.toggle_selected(index) {
            return Err(CribError::SelectionFull);
        }
        Ok(self.player_hand.selected().contains(&index))
    }

    /// Lays the selected cards and the opponent's choice away to the crib,
    /// cuts the starter and begins pegging.
    ///
    /// A Jack starter pegs his heels for the dealer at once, which may end
    /// the game. Returns the starter.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in crib selection, fewer than two
    /// cards are selected, or no card is left to cut.
    pub fn confirm_crib_selection(&mut self) -> Result<Card, CribError> {
        if self.state != GameState::CribSelection {
            return Err(CribError::InvalidState);
        }
        if self.player_hand.selected().len() != 2 {
            return Err(CribError::IncompleteSelection);
        }
        let dealer = self.dealer.ok_or(CribError::InvalidState)?;
        let opponent_cards: &[Card; 6] = self
            .opponent_hand
            .cards()
            .try_into()
            .map_err(|_| CribError::InvalidState)?;
        if self.deck.is_empty() {
            return Err(CribError::NoStarter);
        }

        let discards = ai::choose_crib_discards(opponent_cards, dealer == Side::Opponent);

        self.crib = self.player_hand.take_selected();
        for card in discards {
            self.opponent_hand.remove(card);
            self.crib.push(card);
        }

        let starter = self.deck.draw().ok_or(CribError::NoStarter)?;
        self.starter = Some(starter);
        self.pegging = PeggingState::new(dealer.other());
        self.state = GameState::Pegging;
        log::debug!("starter {starter}, crib {:?}", self.crib);

        if starter.rank == Rank::Jack {
            self.award(dealer, self.options.his_heels_points, ScoreReason::HisHeels);
        }

        Ok(starter)
    }
}
