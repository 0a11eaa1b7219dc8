//! The polymorphic game contract and its variant implementations.
//!
//! Each variant owns one [`GameState`] built at construction and
//! implements a fixed capability set: legality (`can_move`), post-move
//! side effects (`on_move`), stock interaction (`on_stock_click`), win
//! detection, and a static board layout. Variants are selected through
//! the registry at construction time; nothing dispatches on runtime
//! type.
//!
//! `can_move` is a pure predicate. It never mutates state and rejects
//! the same baseline everywhere: an empty card list, or a source equal
//! to the destination. The orchestrator in [`crate::session`] owns the
//! actual card transfer; `on_move` runs after the cards have already
//! arrived.

pub mod freecell;
pub mod klondike;
pub mod layout;
pub mod sequence;
pub mod spider;

pub use freecell::Freecell;
pub use klondike::Klondike;
pub use layout::{BoardLayout, BoardSlot};
pub use spider::Spider;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, RANK_KING};
use crate::piles::{Pile, PileId, PileKind};
use crate::state::GameState;

/// Which rule family a game belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantId {
    Klondike,
    Spider,
    Freecell,
}

impl VariantId {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VariantId::Klondike => "Klondike",
            VariantId::Spider => "Spider",
            VariantId::Freecell => "FreeCell",
        }
    }
}

/// Rule object for one patience variant.
///
/// Implementations construct their own fresh [`GameState`] (deal
/// included) in their constructors, so a half-initialized game is
/// unrepresentable.
pub trait GameRule {
    /// Rule family.
    fn variant(&self) -> VariantId;

    /// Registry id for this game including its configuration
    /// (e.g. `"klondike-3"`, `"spider-2"`).
    fn game_id(&self) -> &'static str;

    fn state(&self) -> &GameState;

    fn state_mut(&mut self) -> &mut GameState;

    /// Pure legality check for placing `cards` onto `to`.
    ///
    /// `from` is `None` when the candidate cards are not being lifted
    /// from a pile (foundation auto-move probing). Must reject an empty
    /// `cards` list and `from == Some(to)`.
    fn can_move(&self, cards: &[Card], from: Option<PileId>, to: PileId) -> bool;

    /// Post-move hook, called after `cards` have been transferred from
    /// `from` to `to`. Auto-flips and Spider's sequence collection
    /// happen here.
    fn on_move(&mut self, cards: &[Card], from: PileId, to: PileId);

    /// Variant stock interaction: draw, recycle, or deal a row.
    fn on_stock_click(&mut self);

    /// True iff every foundation holds a full 13-card suit.
    fn is_won(&self) -> bool {
        let mut any = false;
        for f in self.state().piles_of(PileKind::Foundation) {
            if f.len() != 13 {
                return false;
            }
            any = true;
        }
        any
    }

    /// Static column/row description of this variant's board.
    fn board_layout(&self) -> BoardLayout;

    /// First foundation (in registration order) that accepts `card`,
    /// if any.
    fn find_auto_move_to_foundation(&self, card: Card) -> Option<PileId> {
        self.state()
            .piles_of(PileKind::Foundation)
            .find(|f| self.can_move(&[card], None, f.id()))
            .map(Pile::id)
    }
}

/// Baseline rejections shared by every variant's `can_move`.
pub(crate) fn rejects_baseline(cards: &[Card], from: Option<PileId>, to: PileId) -> bool {
    cards.is_empty() || from == Some(to)
}

/// Klondike/FreeCell tableau placement for the bottom card of a run:
/// empty piles take a King, otherwise alternate color one rank down.
pub(crate) fn tableau_accepts_alternating(target: &Pile, first: Card) -> bool {
    match target.top() {
        None => first.rank == RANK_KING,
        Some(top) => first.is_red() != top.is_red() && first.rank + 1 == top.rank,
    }
}
