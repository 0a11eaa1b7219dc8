//! # solitaire-core
//!
//! A rules engine for patience card games: Klondike, Spider, and
//! FreeCell. The crate owns the card/pile data model, per-variant
//! legality and side effects, snapshot-based undo, win detection, and
//! saved-game records. Rendering, input handling, animation, and
//! storage are consumers of this API, not part of it.
//!
//! ## Design
//!
//! - **One contract, three variants**: every game implements
//!   [`GameRule`] — legality, post-move effects, stock interaction,
//!   win detection, board layout — and is selected at construction
//!   through the [`registry`]. Nothing inspects runtime types.
//!
//! - **Moves are exclusive transfers**: a run leaves its source pile
//!   and arrives on its destination; no card is ever in two piles.
//!   Runs are addressed by `(pile, start_index)`, never by card
//!   identity, so duplicate cards in Spider's pack are unambiguous.
//!
//! - **Undo is a value snapshot**: before every mutating action the
//!   session captures all piles; undo restores the capture. A deep
//!   value copy of at most 104 cards is cheap, and cannot drift the
//!   way inverse-operation replay can.
//!
//! - **Deterministic deals**: every game is constructed from a `u64`
//!   seed via ChaCha8, so deals are shareable and tests reproducible.
//!
//! ## Modules
//!
//! - `cards`: suits, cards, deal-time decks
//! - `piles`: typed, ordered card stacks with stable ids
//! - `core`: seeded RNG
//! - `state`: the pile aggregate, snapshots, undo stack, clock
//! - `rules`: the `GameRule` trait and the three variants
//! - `session`: move orchestration (validate, apply, undo, auto-move)
//! - `registry`: variant id to constructed game
//! - `save`: versioned saved-game records

pub mod cards;
pub mod core;
pub mod piles;
pub mod registry;
pub mod rules;
pub mod save;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use crate::cards::{Card, Color, Deck, SpiderSuits, Suit, RANK_ACE, RANK_KING};

pub use crate::core::GameRng;

pub use crate::piles::{CardRun, Pile, PileId, PileKind};

pub use crate::state::{GameState, PileSnapshot, Snapshot};

pub use crate::rules::{BoardLayout, BoardSlot, Freecell, GameRule, Klondike, Spider, VariantId};

pub use crate::session::GameSession;

pub use crate::registry::{create, create_random, game_list, GameInfo};

pub use crate::save::{SavedGame, SAVE_VERSION};
