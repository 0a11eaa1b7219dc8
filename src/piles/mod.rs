//! Piles: the ordered, typed card stacks a game is made of.
//!
//! Index 0 is the bottom of a pile and the last index is the top, the
//! playable end for stack-like piles. Piles are created during setup,
//! live for the whole session, and are only ever emptied, never
//! destroyed.
//!
//! Runs are lifted by position, not by card identity: a move names
//! `(pile, start_index)` and takes everything from that index to the
//! top. This stays unambiguous even when a pack contains duplicate
//! `(suit, rank)` values, as Spider's does.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// A lifted run of cards. Never longer than 13, so it lives on the
/// stack.
pub type CardRun = SmallVec<[Card; 13]>;

/// Stable pile identifier, unique within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId(pub u16);

impl PileId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// What role a pile plays in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PileKind {
    Tableau,
    Foundation,
    Stock,
    Waste,
    Freecell,
}

/// An ordered stack of cards with a stable id and kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    id: PileId,
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(id: PileId, kind: PileKind) -> Self {
        Self { id, kind, cards: Vec::new() }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// The run from `index` to the top, without removing it.
    #[must_use]
    pub fn run_from(&self, index: usize) -> &[Card] {
        self.cards.get(index..).unwrap_or(&[])
    }

    /// Append a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append cards on top, preserving their relative order.
    pub fn push_many<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return everything from `index` to the top.
    ///
    /// Returns an empty run if `index` is out of bounds.
    pub fn take_from(&mut self, index: usize) -> CardRun {
        if index >= self.cards.len() {
            return CardRun::new();
        }
        self.cards.drain(index..).collect()
    }

    /// Flip the top card, if any, to the given orientation.
    pub fn flip_top(&mut self, face_up: bool) {
        if let Some(top) = self.cards.last_mut() {
            top.face_up = face_up;
        }
    }

    /// Replace the card list wholesale (snapshot restore).
    pub(crate) fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: u8) -> Card {
        Card::new(Suit::Spades, rank)
    }

    fn pile_with(ranks: &[u8]) -> Pile {
        let mut pile = Pile::new(PileId::new(0), PileKind::Tableau);
        pile.push_many(ranks.iter().map(|&r| card(r)));
        pile
    }

    #[test]
    fn test_push_pop_top() {
        let mut pile = pile_with(&[3, 2]);
        assert_eq!(pile.top(), Some(card(2)));

        pile.push(card(1));
        assert_eq!(pile.len(), 3);
        assert_eq!(pile.pop(), Some(card(1)));
        assert_eq!(pile.pop(), Some(card(2)));
        assert_eq!(pile.pop(), Some(card(3)));
        assert_eq!(pile.pop(), None);
        assert_eq!(pile.top(), None);
    }

    #[test]
    fn test_take_from_lifts_to_top() {
        let mut pile = pile_with(&[9, 8, 7, 6]);
        let run = pile.take_from(2);
        assert_eq!(run.as_slice(), &[card(7), card(6)]);
        assert_eq!(pile.cards(), &[card(9), card(8)]);
    }

    #[test]
    fn test_take_from_out_of_bounds() {
        let mut pile = pile_with(&[5]);
        assert!(pile.take_from(1).is_empty());
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn test_run_from() {
        let pile = pile_with(&[4, 3, 2]);
        assert_eq!(pile.run_from(1), &[card(3), card(2)]);
        assert!(pile.run_from(3).is_empty());
        assert!(pile.run_from(99).is_empty());
    }

    #[test]
    fn test_flip_top() {
        let mut pile = pile_with(&[5]);
        assert!(!pile.top().unwrap().face_up);
        pile.flip_top(true);
        assert!(pile.top().unwrap().face_up);

        // No-op on an empty pile.
        let mut empty = Pile::new(PileId::new(1), PileKind::Waste);
        empty.flip_top(true);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_push_many_preserves_order() {
        let mut pile = pile_with(&[10]);
        pile.push_many([card(9), card(8)]);
        assert_eq!(pile.cards(), &[card(10), card(9), card(8)]);
    }
}
