//! Card types and deck utilities.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

/// Card rank, ordered Ace (low) through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Ace.
    Ace = 0,
    /// Two.
    Two = 1,
    /// Three.
    Three = 2,
    /// Four.
    Four = 3,
    /// Five.
    Five = 4,
    /// Six.
    Six = 5,
    /// Seven.
    Seven = 6,
    /// Eight.
    Eight = 7,
    /// Nine.
    Nine = 8,
    /// Ten.
    Ten = 9,
    /// Jack.
    Jack = 10,
    /// Queen.
    Queen = 11,
    /// King.
    King = 12,
}

impl Rank {
    /// All ranks in ordinal order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Counting value used for fifteens and the running count.
    ///
    /// Ace is 1, number cards are face value, and Ten through King are 10.
    #[must_use]
    pub const fn pip(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8 + 1,
        }
    }

    /// Sequence position (0 for Ace through 12 for King).
    ///
    /// Runs and the cut for dealer use this, never [`Rank::pip`].
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a rank by its ordinal.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal < 13 {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        };
        f.write_str(label)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Clubs.
    Clubs = 2,
    /// Spades.
    Spades = 3,
}

impl Suit {
    /// All suits in ordinal order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Storage ordinal (0..=3).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a suit by its ordinal.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal < 4 {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Spades => "♠",
        };
        f.write_str(symbol)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Counting value of the card's rank.
    #[must_use]
    pub const fn pip(self) -> u8 {
        self.rank.pip()
    }

    /// Sequence position of the card's rank.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.rank.ordinal()
    }

    /// Encodes the card as `(rank ordinal, suit ordinal)`.
    #[must_use]
    pub const fn ordinals(self) -> (u8, u8) {
        (self.rank.ordinal(), self.suit.ordinal())
    }

    /// Decodes a card from `(rank ordinal, suit ordinal)`.
    ///
    /// Returns `None` if either ordinal is out of range.
    #[must_use]
    pub const fn from_ordinals(rank: u8, suit: u8) -> Option<Self> {
        match (Rank::from_ordinal(rank), Suit::from_ordinal(suit)) {
            (Some(rank), Some(suit)) => Some(Self::new(rank, suit)),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck. Cards are drawn from the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck in suit-major order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a full deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Applies a uniformly random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the head card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the remaining cards from the head.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
