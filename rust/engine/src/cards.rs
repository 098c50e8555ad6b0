use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] and determines the card's [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥), red
    Hearts,
    /// Diamonds suit (♦), red
    Diamonds,
    /// Clubs suit (♣), black
    Clubs,
    /// Spades suit (♠), black
    Spades,
}

impl Suit {
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Card color. Tableau runs must alternate between the two.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Represents the rank of a playing card from Ace (1) through King (13).
/// Ordinals drive both the tableau (descending) and foundation (ascending) rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1), the only card that may start a foundation
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13), the only card that may fill an empty tableau column
    King,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.value() == v)
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A playing card identified by suit and rank.
///
/// Cards are plain values: two cards with the same suit and rank are the same
/// logical card. Whether a card is showing is a property of the pile slot it
/// occupies, see [`PileCard`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Whether `self` may be appended below `other` in a tableau run:
    /// exactly one rank lower and of the opposite color.
    ///
    /// ```
    /// use klondike_engine::cards::{Card, Rank, Suit};
    ///
    /// let queen = Card::new(Suit::Hearts, Rank::Queen);
    /// assert!(queen.can_place_on_tableau(&Card::new(Suit::Spades, Rank::King)));
    /// assert!(!queen.can_place_on_tableau(&Card::new(Suit::Diamonds, Rank::King)));
    /// ```
    pub fn can_place_on_tableau(&self, other: &Card) -> bool {
        self.rank.value() + 1 == other.rank.value() && self.color() != other.color()
    }

    /// Whether `self` may be placed on a foundation whose top card is `top`.
    /// An empty foundation accepts only an ace.
    ///
    /// ```
    /// use klondike_engine::cards::{Card, Rank, Suit};
    ///
    /// let ace = Card::new(Suit::Clubs, Rank::Ace);
    /// let two = Card::new(Suit::Clubs, Rank::Two);
    /// assert!(ace.can_place_on_foundation(None));
    /// assert!(two.can_place_on_foundation(Some(&ace)));
    /// assert!(!two.can_place_on_foundation(None));
    /// ```
    pub fn can_place_on_foundation(&self, top: Option<&Card>) -> bool {
        match top {
            None => self.rank == Rank::Ace,
            Some(top) => self.suit == top.suit && self.rank.value() == top.rank.value() + 1,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// A card as it lies in a pile, together with its face-up flag.
/// Flipping a card changes the slot, never the card's identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PileCard {
    pub card: Card,
    pub face_up: bool,
}

impl PileCard {
    pub fn face_down(card: Card) -> Self {
        Self {
            card,
            face_up: false,
        }
    }

    pub fn face_up(card: Card) -> Self {
        Self {
            card,
            face_up: true,
        }
    }

    pub fn turn_up(&mut self) {
        self.face_up = true;
    }

    pub fn turn_down(&mut self) {
        self.face_up = false;
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// The 52 cards in suit-major, rank-ascending order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
