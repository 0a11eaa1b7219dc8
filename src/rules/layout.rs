//! Static board geometry, queryable by a rendering layer.
//!
//! Pure data: a column/row slot per pile plus whether the pile fans its
//! cards downward. The engine never reads this back; it exists so the
//! rule object remains the single source of truth about its layout.

use serde::{Deserialize, Serialize};

use crate::piles::{PileId, PileKind};

/// Where one pile sits on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSlot {
    pub pile: PileId,
    pub kind: PileKind,
    /// Zero-based column.
    pub column: u8,
    /// Zero-based row.
    pub row: u8,
    /// True if cards spread downward instead of stacking squared.
    pub fanned: bool,
}

/// Column/row map for every pile of a variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Total columns the layout spans.
    pub columns: u8,
    pub slots: Vec<BoardSlot>,
}

impl BoardLayout {
    /// The slot for a pile, if the pile is part of this layout.
    #[must_use]
    pub fn slot(&self, pile: PileId) -> Option<&BoardSlot> {
        self.slots.iter().find(|s| s.pile == pile)
    }
}
