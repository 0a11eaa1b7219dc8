//! Variant registry: string id to constructed, dealt game.
//!
//! The registry is the only place a variant is chosen; everything past
//! construction works through the [`GameRule`] trait object. Unknown
//! ids are hard errors for the caller to catch and fall back from.

use anyhow::{bail, Result};
use log::info;

use crate::cards::SpiderSuits;
use crate::core::GameRng;
use crate::rules::{Freecell, GameRule, Klondike, Spider};
use crate::session::GameSession;

/// Presentation metadata for one registered game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Every registered game, in menu order.
pub const GAMES: &[GameInfo] = &[
    GameInfo {
        id: "klondike",
        name: "Klondike",
        description: "The classic: seven columns, draw one from the stock.",
    },
    GameInfo {
        id: "klondike-3",
        name: "Klondike (Draw 3)",
        description: "Klondike dealing three stock cards at a time.",
    },
    GameInfo {
        id: "spider",
        name: "Spider (1 suit)",
        description: "Ten columns, one suit, build full King-to-Ace runs.",
    },
    GameInfo {
        id: "spider-2",
        name: "Spider (2 suits)",
        description: "Spider with spades and hearts.",
    },
    GameInfo {
        id: "spider-4",
        name: "Spider (4 suits)",
        description: "Full-difficulty Spider with all four suits.",
    },
    GameInfo {
        id: "freecell",
        name: "FreeCell",
        description: "Everything face up, four free cells, supermoves.",
    },
];

/// The registered games for menu presentation.
#[must_use]
pub fn game_list() -> &'static [GameInfo] {
    GAMES
}

/// Construct and deal a game by registry id.
///
/// Errors on an unknown id; the application layer catches this and
/// falls back to a default game.
pub fn create(id: &str, seed: u64) -> Result<GameSession> {
    let rule: Box<dyn GameRule> = match id {
        "klondike" => Box::new(Klondike::new(seed, 1)),
        "klondike-3" => Box::new(Klondike::new(seed, 3)),
        "spider" => Box::new(Spider::new(seed, SpiderSuits::One)),
        "spider-2" => Box::new(Spider::new(seed, SpiderSuits::Two)),
        "spider-4" => Box::new(Spider::new(seed, SpiderSuits::Four)),
        "freecell" => Box::new(Freecell::new(seed)),
        _ => bail!("unknown game variant: {id}"),
    };
    info!("created game {id} with seed {seed}");
    Ok(GameSession::new(rule))
}

/// Construct a game by id with a fresh random seed.
pub fn create_random(id: &str) -> Result<GameSession> {
    create(id, GameRng::from_entropy().seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::VariantId;

    #[test]
    fn test_every_listed_id_constructs() {
        for info in game_list() {
            let session = create(info.id, 5).unwrap();
            assert_eq!(session.game_id(), info.id);
        }
    }

    #[test]
    fn test_unknown_id_is_error() {
        let err = create("pyramid", 5).unwrap_err();
        assert!(err.to_string().contains("unknown game variant"));
    }

    #[test]
    fn test_variants_map_correctly() {
        assert_eq!(create("klondike", 1).unwrap().rule().variant(), VariantId::Klondike);
        assert_eq!(create("spider-4", 1).unwrap().rule().variant(), VariantId::Spider);
        assert_eq!(create("freecell", 1).unwrap().rule().variant(), VariantId::Freecell);
    }

    #[test]
    fn test_deck_sizes_per_variant() {
        assert_eq!(create("klondike", 9).unwrap().state().total_cards(), 52);
        assert_eq!(create("spider-2", 9).unwrap().state().total_cards(), 104);
        assert_eq!(create("freecell", 9).unwrap().state().total_cards(), 52);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = create("klondike", 1234).unwrap();
        let b = create("klondike", 1234).unwrap();
        assert_eq!(a.state().snapshot(), b.state().snapshot());
    }

    #[test]
    fn test_create_random_constructs() {
        let session = create_random("freecell").unwrap();
        assert_eq!(session.state().total_cards(), 52);
    }
}
