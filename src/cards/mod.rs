//! Card and deck value model.

pub mod card;
pub mod deck;

pub use card::{Card, Color, Suit, RANK_ACE, RANK_KING};
pub use deck::{Deck, SpiderSuits};
