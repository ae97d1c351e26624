use crate::card::Card;
use crate::error::CountError;
use crate::result::{CountReport, CountStep, CountingStage, ScoreReason};
use crate::scoring::score_hand;
use crate::stats::StatsStore;

use super::{Game, GameState};

impl<S: StatsStore> Game<S> {
    /// Counts the next hand, or starts the next round once all are counted.
    ///
    /// The non-dealer's hand is counted first, then the dealer's hand, then
    /// the crib. Each count is credited at once, so the game can end part
    /// way through. The call after the crib alternates the dealer and moves
    /// to `Dealing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not counting or the round's cards are
    /// incomplete.
    pub fn proceed_to_next_counting(&mut self) -> Result<CountStep, CountError> {
        if self.state != GameState::HandCounting {
            return Err(CountError::InvalidState);
        }
        let dealer = self.dealer.ok_or(CountError::InvalidState)?;

        let stage = match self.counting {
            None => CountingStage::NonDealerHand,
            Some(stage) => {
                let Some(next) = stage.next() else {
                    let dealer = dealer.other();
                    self.dealer = Some(dealer);
                    self.clear_round();
                    self.state = GameState::Dealing;
                    log::debug!("next round, {dealer:?} deals");
                    return Ok(CountStep::NextRound { dealer });
                };
                next
            }
        };

        let starter = self.starter.ok_or(CountError::NoStarter)?;
        let (side, cards, is_crib) = match stage {
            CountingStage::NonDealerHand => (dealer.other(), self.hand(dealer.other()).kept(), false),
            CountingStage::DealerHand => (dealer, self.hand(dealer).kept(), false),
            CountingStage::Crib => (dealer, <[Card; 4]>::try_from(self.crib.as_slice()).ok(), true),
        };
        let cards = cards.ok_or(CountError::MalformedHand)?;

        let score = score_hand(&cards, starter, is_crib);
        let report = CountReport {
            stage,
            side,
            cards,
            starter,
            score,
        };
        self.counting = Some(stage);
        self.last_count = Some(report.clone());

        let reason = if is_crib {
            ScoreReason::Crib
        } else {
            ScoreReason::Hand
        };
        self.award(side, report.score.total(), reason);

        Ok(CountStep::Counted(report))
    }
}
