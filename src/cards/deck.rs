//! Deal-time deck construction.
//!
//! A `Deck` only exists while a variant sets up its piles: it is built,
//! shuffled with a seeded [`GameRng`], partitioned by `deal`, and then
//! dropped. It is never part of persisted state.

use crate::cards::card::{Card, Suit, RANK_ACE, RANK_KING};
use crate::core::GameRng;

/// Suit composition for Spider's 104-card pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpiderSuits {
    /// Eight copies of spades.
    One,
    /// Four copies each of spades and hearts.
    Two,
    /// Two copies of every suit.
    Four,
}

impl SpiderSuits {
    /// The distinct suits in this composition.
    #[must_use]
    pub fn suits(self) -> &'static [Suit] {
        match self {
            SpiderSuits::One => &[Suit::Spades],
            SpiderSuits::Two => &[Suit::Spades, Suit::Hearts],
            SpiderSuits::Four => &Suit::ALL,
        }
    }

    /// How many times each suit repeats to reach 104 cards.
    #[must_use]
    pub fn copies(self) -> usize {
        match self {
            SpiderSuits::One => 8,
            SpiderSuits::Two => 4,
            SpiderSuits::Four => 2,
        }
    }
}

/// An ordered stack of cards pending the deal. `deal` removes from the
/// front.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The standard 52-card pack, face down.
    #[must_use]
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in RANK_ACE..=RANK_KING {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Spider's 104-card pack for the given suit composition.
    #[must_use]
    pub fn spider(suits: SpiderSuits) -> Self {
        let mut cards = Vec::with_capacity(104);
        for _ in 0..suits.copies() {
            for &suit in suits.suits() {
                for rank in RANK_ACE..=RANK_KING {
                    cards.push(Card::new(suit, rank));
                }
            }
        }
        debug_assert_eq!(cards.len(), 104);
        Self { cards }
    }

    /// Uniform in-place shuffle.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the first `n` cards.
    ///
    /// Permissive: returns fewer if the deck runs out. Setup code
    /// asserts the counts it expects instead.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Remove and return one card, if any remain.
    pub fn deal_one(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
