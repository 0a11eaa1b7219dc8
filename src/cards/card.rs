//! Card value model.
//!
//! A `Card` is a `(suit, rank)` pair plus a mutable face-up flag. Rules
//! compare cards by value, never by instance: undo rebuilds every pile
//! from a snapshot, so nothing in the engine may rely on card identity
//! surviving a mutation.

use serde::{Deserialize, Serialize};

/// Lowest rank (Ace).
pub const RANK_ACE: u8 = 1;
/// Highest rank (King).
pub const RANK_KING: u8 = 13;

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits, in a fixed order used for deck construction.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Card color derived from the suit.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// One-letter suit tag for labels and logs.
    #[must_use]
    pub fn short(self) -> &'static str {
        match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        }
    }
}

/// Red or black, the property alternating-color rules care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// A single playing card.
///
/// `rank` is always in `1..=13` (1 = Ace, 11 = Jack, 12 = Queen,
/// 13 = King). Only `face_up` ever changes after the deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        assert!((RANK_ACE..=RANK_KING).contains(&rank), "rank out of range: {rank}");
        Self { suit, rank, face_up: false }
    }

    /// Derived color.
    #[must_use]
    pub fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_red(self) -> bool {
        self.color() == Color::Red
    }

    /// Display form of the rank: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub fn display_rank(self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }

    /// Stable value key, e.g. `"QH"` for the queen of hearts.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}{}", self.display_rank(), self.suit.short())
    }

    /// Value equality ignoring orientation.
    #[must_use]
    pub fn same_value(self, other: Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
