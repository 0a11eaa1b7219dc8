//! Run validity and foundation acceptance, shared across variants.

use crate::cards::{Card, RANK_ACE, RANK_KING};
use crate::piles::Pile;

/// Strictly descending by one each step, colors alternating
/// (Klondike/FreeCell tableau runs). Single cards are valid runs.
#[must_use]
pub fn is_alternating_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        pair[1].rank + 1 == pair[0].rank && pair[1].color() != pair[0].color()
    })
}

/// Strictly descending by one each step, all the same suit (Spider
/// runs).
#[must_use]
pub fn is_same_suit_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        pair[1].rank + 1 == pair[0].rank && pair[1].suit == pair[0].suit
    })
}

/// Ascending same-suit foundation rule: an empty foundation takes only
/// an Ace; otherwise the incoming card must match the top card's suit
/// and be exactly one rank above it.
#[must_use]
pub fn foundation_accepts(foundation: &Pile, card: Card) -> bool {
    match foundation.top() {
        None => card.rank == RANK_ACE,
        Some(top) => card.suit == top.suit && card.rank == top.rank + 1,
    }
}

/// True if the topmost 13 cards of `pile` are a face-up King-through-Ace
/// run of one suit (Spider's completed sequence).
#[must_use]
pub fn has_completed_run(pile: &Pile) -> bool {
    if pile.len() < 13 {
        return false;
    }
    let run = pile.run_from(pile.len() - 13);
    run[0].rank == RANK_KING && run.iter().all(|c| c.face_up) && is_same_suit_run(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::piles::{PileId, PileKind};

    fn up(suit: Suit, rank: u8) -> Card {
        let mut c = Card::new(suit, rank);
        c.face_up = true;
        c
    }

    #[test]
    fn test_alternating_run() {
        assert!(is_alternating_run(&[up(Suit::Spades, 9)]));
        assert!(is_alternating_run(&[
            up(Suit::Spades, 9),
            up(Suit::Hearts, 8),
            up(Suit::Clubs, 7),
        ]));
        // Same color adjacent.
        assert!(!is_alternating_run(&[up(Suit::Spades, 9), up(Suit::Clubs, 8)]));
        // Rank gap.
        assert!(!is_alternating_run(&[up(Suit::Spades, 9), up(Suit::Hearts, 7)]));
    }

    #[test]
    fn test_same_suit_run() {
        assert!(is_same_suit_run(&[up(Suit::Hearts, 5), up(Suit::Hearts, 4)]));
        assert!(!is_same_suit_run(&[up(Suit::Hearts, 5), up(Suit::Diamonds, 4)]));
        assert!(!is_same_suit_run(&[up(Suit::Hearts, 5), up(Suit::Hearts, 3)]));
    }

    #[test]
    fn test_foundation_accepts() {
        let mut foundation = Pile::new(PileId::new(0), PileKind::Foundation);
        assert!(foundation_accepts(&foundation, up(Suit::Clubs, RANK_ACE)));
        assert!(!foundation_accepts(&foundation, up(Suit::Clubs, 2)));

        foundation.push(up(Suit::Clubs, 1));
        foundation.push(up(Suit::Clubs, 2));
        assert!(foundation_accepts(&foundation, up(Suit::Clubs, 3)));
        assert!(!foundation_accepts(&foundation, up(Suit::Spades, 3)));
        assert!(!foundation_accepts(&foundation, up(Suit::Clubs, 4)));
    }

    #[test]
    fn test_completed_run_detection() {
        let mut pile = Pile::new(PileId::new(0), PileKind::Tableau);
        // Buried extra card below the run.
        pile.push(up(Suit::Hearts, 2));
        for rank in (1..=13).rev() {
            pile.push(up(Suit::Spades, rank));
        }
        assert!(has_completed_run(&pile));

        // A face-down card inside the run breaks it.
        let mut hidden = pile.clone();
        let mut cards = hidden.take_from(0).to_vec();
        cards[5].face_up = false;
        hidden.push_many(cards);
        assert!(!has_completed_run(&hidden));
    }

    #[test]
    fn test_completed_run_needs_thirteen() {
        let mut pile = Pile::new(PileId::new(0), PileKind::Tableau);
        for rank in (2..=13).rev() {
            pile.push(up(Suit::Spades, rank));
        }
        assert!(!has_completed_run(&pile));
    }
}
