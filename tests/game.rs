//! Game integration tests.

use cribrs::{
    Card, CountError, CountStep, CountingStage, CribError, CutError, DealError, Deck, Game,
    GameOptions, GameState, GoError, MatchStats, MemoryStatsStore, OpponentMove, PlayError, Rank,
    ScoreReason, SetupError, Side, Skunk, StatsError, StatsStore, Suit, choose_pegging_card,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Starts games on successive seeds until `dealer` wins the cut.
fn game_with_dealer(options: GameOptions, dealer: Side) -> Game {
    (0..)
        .map(|seed| {
            let mut game = Game::new(options, seed);
            game.start_game().unwrap();
            game.cut_for_dealer().unwrap();
            game
        })
        .find(|game| game.dealer() == Some(dealer))
        .unwrap()
}

/// Builds a deck that deals `player` and `opponent` their six cards, then
/// offers `rest` (starter first).
fn arranged_deck(dealer: Side, player: [Card; 6], opponent: [Card; 6], rest: &[Card]) -> Deck {
    let mut cards = Vec::new();
    for i in 0..6 {
        let (non_dealer, dealer) = match dealer {
            Side::Player => (opponent[i], player[i]),
            Side::Opponent => (player[i], opponent[i]),
        };
        cards.push(non_dealer);
        cards.push(dealer);
    }
    cards.extend_from_slice(rest);
    Deck::from_cards(cards)
}

/// Plays whole games with the heuristic choosing for both sides.
fn play_out<S: StatsStore>(game: &mut Game<S>) {
    for _ in 0..100_000 {
        match game.state() {
            GameState::Setup => game.start_game().unwrap(),
            GameState::CutForDealer => {
                game.cut_for_dealer().unwrap();
            }
            GameState::Dealing => game.deal_cards().unwrap(),
            GameState::CribSelection => {
                game.toggle_card_selection(0).unwrap();
                game.toggle_card_selection(1).unwrap();
                game.confirm_crib_selection().unwrap();
            }
            GameState::Pegging => {
                assert!(game.pegging().count() <= 31);
                if game.pending_reset().is_some() {
                    game.acknowledge_reset().unwrap();
                } else if game.pegging().turn() == Side::Player {
                    let hand = game.player_hand();
                    let choice = choose_pegging_card(
                        hand.cards(),
                        hand.played(),
                        game.pegging().count(),
                        game.pegging().pile(),
                        game.opponent_hand().unplayed_count(),
                    );
                    match choice {
                        Some(index) => {
                            game.play_card(index).unwrap();
                        }
                        None => {
                            game.go().unwrap();
                        }
                    }
                } else {
                    game.opponent_move().unwrap();
                }
            }
            GameState::HandCounting => {
                game.proceed_to_next_counting().unwrap();
            }
            GameState::GameOver => return,
        }
    }
    panic!("game did not finish");
}

#[test]
fn commands_out_of_phase_are_rejected() {
    let mut game = Game::new(GameOptions::default(), 7);
    assert_eq!(game.state(), GameState::Setup);

    assert_eq!(game.cut_for_dealer().unwrap_err(), CutError::InvalidState);
    assert_eq!(game.deal_cards().unwrap_err(), DealError::InvalidState);
    assert_eq!(
        game.toggle_card_selection(0).unwrap_err(),
        CribError::InvalidState
    );
    assert_eq!(game.play_card(0).unwrap_err(), PlayError::InvalidState);
    assert_eq!(game.go().unwrap_err(), GoError::InvalidState);
    assert_eq!(game.opponent_move().unwrap_err(), PlayError::InvalidState);
    assert_eq!(
        game.proceed_to_next_counting().unwrap_err(),
        CountError::InvalidState
    );
    assert_eq!(
        game.dismiss_winner_modal().unwrap_err(),
        SetupError::InvalidState
    );

    game.start_game().unwrap();
    assert_eq!(game.state(), GameState::CutForDealer);
    assert_eq!(game.start_game().unwrap_err(), SetupError::InvalidState);
}

#[test]
fn cut_picks_the_lower_card_and_is_saved() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.start_game().unwrap();
    let report = game.cut_for_dealer().unwrap();

    assert_ne!(report.player_card.ordinal(), report.opponent_card.ordinal());
    let expected = if report.player_card.ordinal() < report.opponent_card.ordinal() {
        Side::Player
    } else {
        Side::Opponent
    };
    assert_eq!(report.dealer, expected);
    assert_eq!(game.dealer(), Some(expected));
    for (player, opponent) in &report.ties {
        assert_eq!(player.ordinal(), opponent.ordinal());
    }

    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(
        game.store().load_cut_cards(),
        Ok(Some((report.player_card, report.opponent_card)))
    );
    assert_eq!(
        game.snapshot().cut_cards,
        Some((report.player_card, report.opponent_card))
    );
}

#[test]
fn deal_gives_six_each_and_leaves_forty() {
    let mut game = game_with_dealer(GameOptions::default(), Side::Player);
    game.deal_cards().unwrap();

    assert_eq!(game.state(), GameState::CribSelection);
    assert_eq!(game.player_hand().len(), 6);
    assert_eq!(game.opponent_hand().len(), 6);
    assert_eq!(game.cards_remaining(), 40);
}

#[test]
fn short_deck_is_rejected() {
    let mut game = game_with_dealer(GameOptions::default(), Side::Player);
    let deck = Deck::from_cards(vec![card(Rank::Ace, Suit::Hearts); 11]);
    assert_eq!(game.deal_from(deck).unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(game.state(), GameState::Dealing);
}

#[test]
fn deck_without_a_starter_is_rejected() {
    let mut game = game_with_dealer(GameOptions::default(), Side::Player);
    let twelve: Vec<Card> = Deck::new().iter().take(12).copied().collect();
    assert_eq!(
        game.deal_from(Deck::from_cards(twelve)).unwrap_err(),
        DealError::NotEnoughCards
    );
    assert_eq!(game.state(), GameState::Dealing);
    assert!(game.player_hand().is_empty());

    let thirteen: Vec<Card> = Deck::new().iter().take(13).copied().collect();
    game.deal_from(Deck::from_cards(thirteen)).unwrap();
    game.toggle_card_selection(0).unwrap();
    game.toggle_card_selection(1).unwrap();
    assert!(game.confirm_crib_selection().is_ok());
    assert_eq!(game.state(), GameState::Pegging);
}

#[test]
fn cut_ties_are_cut_again() {
    let report = (0..1000)
        .find_map(|seed| {
            let mut game = Game::new(GameOptions::default(), seed);
            game.start_game().unwrap();
            let report = game.cut_for_dealer().unwrap();
            (!report.ties.is_empty()).then_some(report)
        })
        .expect("some seed ties the first cut");

    for (player, opponent) in &report.ties {
        assert_eq!(player.ordinal(), opponent.ordinal());
    }
    assert_ne!(report.player_card.ordinal(), report.opponent_card.ordinal());
}

#[test]
fn crib_selection_limits_and_starter() {
    let mut game = game_with_dealer(GameOptions::default(), Side::Player);
    game.deal_cards().unwrap();

    assert_eq!(
        game.confirm_crib_selection().unwrap_err(),
        CribError::IncompleteSelection
    );
    assert_eq!(game.toggle_card_selection(0), Ok(true));
    assert_eq!(game.toggle_card_selection(1), Ok(true));
    assert_eq!(
        game.toggle_card_selection(2).unwrap_err(),
        CribError::SelectionFull
    );
    assert_eq!(game.toggle_card_selection(1), Ok(false));
    assert_eq!(game.toggle_card_selection(3), Ok(true));
    assert_eq!(
        game.toggle_card_selection(6).unwrap_err(),
        CribError::CardNotFound
    );

    let discarded = [game.player_hand().cards()[0], game.player_hand().cards()[3]];
    let starter = game.confirm_crib_selection().unwrap();

    assert_eq!(game.state(), GameState::Pegging);
    assert_eq!(game.starter(), Some(starter));
    assert_eq!(game.crib().len(), 4);
    assert_eq!(&game.crib()[..2], &discarded);
    assert_eq!(game.player_hand().len(), 4);
    assert_eq!(game.opponent_hand().len(), 4);
    assert_eq!(game.pegging().turn(), Side::Opponent);
    assert_eq!(game.snapshot().turn, Some(Side::Opponent));
}

#[test]
fn jack_starter_pegs_his_heels_for_the_dealer() {
    let mut game = game_with_dealer(GameOptions::default(), Side::Opponent);
    let player = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Seven, Suit::Hearts),
    ];
    let opponent = [
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
    ];
    let deck = arranged_deck(
        Side::Opponent,
        player,
        opponent,
        &[card(Rank::Jack, Suit::Spades)],
    );
    game.deal_from(deck).unwrap();
    game.toggle_card_selection(4).unwrap();
    game.toggle_card_selection(5).unwrap();
    game.confirm_crib_selection().unwrap();

    assert_eq!(game.score(Side::Opponent), 2);
    assert_eq!(game.score(Side::Player), 0);
    assert_eq!(game.score_log().len(), 1);
    assert_eq!(game.score_log()[0].reason, ScoreReason::HisHeels);
}

#[test]
fn pegging_round_through_counting() {
    let mut game = game_with_dealer(GameOptions::default(), Side::Opponent);
    let player = [
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Eight, Suit::Diamonds),
    ];
    let opponent = [
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Jack, Suit::Diamonds),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::King, Suit::Clubs),
    ];
    let deck = arranged_deck(
        Side::Opponent,
        player,
        opponent,
        &[card(Rank::Three, Suit::Hearts), card(Rank::Four, Suit::Spades)],
    );
    game.deal_from(deck).unwrap();
    game.toggle_card_selection(4).unwrap();
    game.toggle_card_selection(5).unwrap();
    assert_eq!(game.confirm_crib_selection(), Ok(card(Rank::Three, Suit::Hearts)));
    assert_eq!(game.pegging().turn(), Side::Player);

    // 5 for 5, ten-card makes fifteen.
    game.play_card(0).unwrap();
    assert_eq!(game.play_card(1).unwrap_err(), PlayError::NotYourTurn);
    let OpponentMove::Played(fifteen) = game.opponent_move().unwrap() else {
        panic!("opponent holds legal cards");
    };
    assert_eq!(fifteen.count, 15);
    assert_eq!(game.score(Side::Opponent), 2);

    assert_eq!(game.play_card(0).unwrap_err(), PlayError::AlreadyPlayed);
    assert_eq!(game.play_card(9).unwrap_err(), PlayError::CardNotFound);
    game.play_card(1).unwrap();
    game.opponent_move().unwrap();
    assert_eq!(game.pegging().count(), 30);

    // Ace fits for 31, so go is refused.
    assert_eq!(game.go().unwrap_err(), GoError::HasLegalPlay);
    assert_eq!(game.play_card(3).unwrap_err(), PlayError::ExceedsThirtyOne);
    let thirty_one = game.play_card(2).unwrap();
    assert_eq!(thirty_one.points(), 2);
    assert_eq!(game.score(Side::Player), 2);

    assert_eq!(game.opponent_move().unwrap_err(), PlayError::ResetPending);
    let reset = game.acknowledge_reset().unwrap();
    assert!(reset.for_31);
    assert_eq!(reset.pile.len(), 5);
    assert_eq!(reset.next_turn, Side::Opponent);
    assert_eq!(game.acknowledge_reset().unwrap_err(), PlayError::InvalidState);

    game.opponent_move().unwrap();
    game.play_card(3).unwrap();
    game.opponent_move().unwrap();

    // Both hands are empty: the opponent takes the last card point.
    assert_eq!(game.state(), GameState::HandCounting);
    assert_eq!(game.score(Side::Opponent), 3);
    assert_eq!(
        game.score_log().last().map(|entry| &entry.reason),
        Some(&ScoreReason::LastCard)
    );
    game.acknowledge_reset().unwrap();

    let CountStep::Counted(non_dealer) = game.proceed_to_next_counting().unwrap() else {
        panic!("expected the non-dealer count");
    };
    assert_eq!(non_dealer.stage, CountingStage::NonDealerHand);
    assert_eq!(non_dealer.side, Side::Player);
    assert_eq!(non_dealer.score.total(), 7);
    assert_eq!(game.score(Side::Player), 9);

    let CountStep::Counted(dealer) = game.proceed_to_next_counting().unwrap() else {
        panic!("expected the dealer count");
    };
    assert_eq!(dealer.stage, CountingStage::DealerHand);
    assert_eq!(dealer.side, Side::Opponent);
    assert_eq!(game.score(Side::Opponent), 3 + u16::from(dealer.score.total()));

    let CountStep::Counted(crib) = game.proceed_to_next_counting().unwrap() else {
        panic!("expected the crib count");
    };
    assert_eq!(crib.stage, CountingStage::Crib);
    assert_eq!(crib.side, Side::Opponent);
    assert!(crib.cards.contains(&card(Rank::Nine, Suit::Spades)));

    assert_eq!(
        game.proceed_to_next_counting(),
        Ok(CountStep::NextRound {
            dealer: Side::Player
        })
    );
    assert_eq!(game.state(), GameState::Dealing);
    assert!(game.player_hand().is_empty());
    assert!(game.crib().is_empty());
}

#[test]
fn full_games_finish_and_update_stats() {
    for seed in 0..8 {
        let mut game = Game::new(GameOptions::default(), seed);
        play_out(&mut game);

        let outcome = game.outcome().expect("finished game has an outcome");
        assert_eq!(game.score(outcome.winner), 121);
        let loser = game.score(outcome.winner.other());
        assert!(loser < 121);
        let expected = if loser < 61 {
            Skunk::Double
        } else if loser < 91 {
            Skunk::Single
        } else {
            Skunk::None
        };
        assert_eq!(outcome.skunk, expected);

        let stats = game.stats();
        assert_eq!(stats.games_played(), 1);
        assert_eq!(game.store().load_stats(), Ok(stats));

        let logged: u16 = game
            .score_log()
            .iter()
            .filter(|entry| entry.side == outcome.winner.other())
            .map(|entry| u16::from(entry.points))
            .sum();
        assert_eq!(logged, loser);
    }
}

#[test]
fn short_games_report_skunks_by_the_configured_lines() {
    let options = GameOptions::default()
        .with_winning_score(31)
        .with_skunk_line(20)
        .with_double_skunk_line(10);

    for seed in 0..8 {
        let mut game = Game::new(options, seed);
        play_out(&mut game);

        let outcome = game.outcome().unwrap();
        assert_eq!(game.score(outcome.winner), 31);
        let loser = game.score(outcome.winner.other());
        let expected = if loser < 10 {
            Skunk::Double
        } else if loser < 20 {
            Skunk::Single
        } else {
            Skunk::None
        };
        assert_eq!(outcome.skunk, expected);
    }
}

#[test]
fn stats_accumulate_across_games() {
    let saved = MatchStats {
        games_won: 4,
        games_lost: 2,
        skunks_for: 1,
        skunks_against: 0,
    };
    let options = GameOptions::default().with_winning_score(31);
    let mut game = Game::with_store(options, 11, MemoryStatsStore::with_stats(saved));
    assert_eq!(game.stats(), saved);

    play_out(&mut game);
    game.dismiss_winner_modal().unwrap();
    assert_eq!(game.state(), GameState::Setup);
    play_out(&mut game);

    assert_eq!(game.stats().games_played(), 8);
    assert_eq!(game.store().load_stats(), Ok(game.stats()));
}

#[derive(Debug, Default)]
struct BrokenStore;

impl StatsStore for BrokenStore {
    fn load_stats(&self) -> Result<MatchStats, StatsError> {
        Err(StatsError::Unavailable)
    }

    fn save_stats(&mut self, _stats: &MatchStats) -> Result<(), StatsError> {
        Err(StatsError::Unavailable)
    }

    fn load_cut_cards(&self) -> Result<Option<(Card, Card)>, StatsError> {
        Err(StatsError::Corrupt)
    }

    fn save_cut_cards(&mut self, _player: Card, _opponent: Card) -> Result<(), StatsError> {
        Err(StatsError::Unavailable)
    }
}

#[test]
fn broken_store_does_not_stop_play() {
    let options = GameOptions::default().with_winning_score(31);
    let mut game = Game::with_store(options, 5, BrokenStore);
    assert_eq!(game.stats(), MatchStats::default());

    play_out(&mut game);
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.stats().games_played(), 1);
}

#[test]
fn snapshot_mirrors_the_table() {
    let mut game = game_with_dealer(GameOptions::default(), Side::Player);
    game.deal_cards().unwrap();
    game.toggle_card_selection(2).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.state, GameState::CribSelection);
    assert_eq!(snapshot.dealer, Some(Side::Player));
    assert_eq!(snapshot.player_hand, game.player_hand().cards());
    assert_eq!(snapshot.player_selected, vec![2]);
    assert_eq!(snapshot.opponent_hand.len(), 6);
    assert_eq!(snapshot.turn, None);
    assert!(snapshot.pile.is_empty());
    assert_eq!(snapshot.player_score, 0);
}

/// Six court cards: whatever the opponent keeps, its pegging cards never pair
/// or run with the player's low cards.
fn court_cards() -> [Card; 6] {
    [
        card(Rank::King, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Queen, Suit::Hearts),
    ]
}

#[test]
fn player_go_gives_the_opponent_a_point() {
    let mut game = game_with_dealer(GameOptions::default(), Side::Player);
    let player = [
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Three, Suit::Diamonds),
    ];
    let deck = arranged_deck(
        Side::Player,
        player,
        court_cards(),
        &[card(Rank::Two, Suit::Hearts)],
    );
    game.deal_from(deck).unwrap();
    game.toggle_card_selection(4).unwrap();
    game.toggle_card_selection(5).unwrap();
    game.confirm_crib_selection().unwrap();
    assert_eq!(game.pegging().turn(), Side::Opponent);

    game.opponent_move().unwrap();
    game.play_card(0).unwrap();
    game.opponent_move().unwrap();
    assert_eq!(game.pegging().count(), 29);

    let reset = game.go().unwrap().expect("neither side can play");
    assert!(!reset.for_31);
    assert_eq!(reset.go_point, Some(Side::Opponent));
    assert_eq!(reset.next_turn, Side::Player);
    assert_eq!(game.score(Side::Opponent), 1);
    assert_eq!(
        game.score_log().last().map(|entry| (entry.side, &entry.reason)),
        Some((Side::Opponent, &ScoreReason::Go))
    );

    assert_eq!(game.play_card(1).unwrap_err(), PlayError::ResetPending);
    assert_eq!(game.go().unwrap_err(), GoError::ResetPending);
    game.acknowledge_reset().unwrap();
    assert_eq!(game.pegging().count(), 0);
    assert_eq!(game.pegging().turn(), Side::Player);
}

#[test]
fn opponent_go_and_automatic_pass_for_an_empty_hand() {
    let mut game = game_with_dealer(GameOptions::default(), Side::Opponent);
    let player = [
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Three, Suit::Diamonds),
    ];
    let deck = arranged_deck(
        Side::Opponent,
        player,
        court_cards(),
        &[card(Rank::Two, Suit::Hearts)],
    );
    game.deal_from(deck).unwrap();
    game.toggle_card_selection(4).unwrap();
    game.toggle_card_selection(5).unwrap();
    game.confirm_crib_selection().unwrap();

    game.play_card(0).unwrap();
    game.opponent_move().unwrap();
    game.play_card(1).unwrap();
    assert_eq!(game.pegging().count(), 28);

    // The ace still fits, so the opponent's go only passes the turn.
    assert_eq!(game.opponent_move(), Ok(OpponentMove::Go(None)));
    assert_eq!(game.pegging().turn(), Side::Player);
    game.play_card(2).unwrap();

    let OpponentMove::Go(Some(reset)) = game.opponent_move().unwrap() else {
        panic!("nobody can play at 29");
    };
    assert_eq!(reset.go_point, Some(Side::Player));
    assert_eq!(game.score(Side::Player), 1);
    assert_eq!(
        game.score_log().last().map(|entry| (entry.side, &entry.reason)),
        Some((Side::Player, &ScoreReason::Go))
    );
    game.acknowledge_reset().unwrap();

    game.opponent_move().unwrap();
    game.play_card(3).unwrap();
    assert_eq!(game.player_hand().unplayed_count(), 0);
    game.opponent_move().unwrap();
    assert_eq!(game.pegging().count(), 0);

    // The player's empty hand said go for them: the opponent took the go and
    // keeps the lead even though the reset handed it to the player.
    let pending = game.pending_reset().cloned().expect("go reset is pending");
    assert_eq!(pending.go_point, Some(Side::Opponent));
    assert_eq!(pending.next_turn, Side::Player);
    assert_eq!(game.score(Side::Opponent), 1);
    assert_eq!(game.state(), GameState::Pegging);
    assert_eq!(game.pegging().turn(), Side::Opponent);

    game.acknowledge_reset().unwrap();
    game.opponent_move().unwrap();
    assert_eq!(game.state(), GameState::HandCounting);
    assert_eq!(game.score(Side::Opponent), 2);
    assert_eq!(
        game.score_log().last().map(|entry| &entry.reason),
        Some(&ScoreReason::LastCard)
    );
}
