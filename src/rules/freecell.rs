//! FreeCell: eight tableau columns, four free cells, four foundations,
//! everything dealt face up.
//!
//! Multi-card tableau moves are supermoves: legality depends on how
//! many cards could be shuffled through empty free cells and empty
//! columns one at a time. The classic capacity formula is
//! `(1 + empty_freecells) * 2^(empty_columns_excluding_target)`.

use log::debug;

use crate::cards::{Card, Deck};
use crate::core::GameRng;
use crate::piles::{PileId, PileKind};
use crate::rules::layout::{BoardLayout, BoardSlot};
use crate::rules::sequence::{foundation_accepts, is_alternating_run};
use crate::rules::{rejects_baseline, tableau_accepts_alternating, GameRule, VariantId};
use crate::state::GameState;

/// FreeCell rule object.
pub struct Freecell {
    state: GameState,
    freecells: [PileId; 4],
    foundations: [PileId; 4],
    tableau: [PileId; 8],
}

impl Freecell {
    /// Deal a fresh game from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut state = GameState::new();
        let freecells = std::array::from_fn(|_| state.add_pile(PileKind::Freecell));
        let foundations = std::array::from_fn(|_| state.add_pile(PileKind::Foundation));
        let tableau = std::array::from_fn(|_| state.add_pile(PileKind::Tableau));

        let mut deck = Deck::standard_52();
        deck.shuffle(&mut GameRng::new(seed));

        // Round-robin across the eight columns, all face up.
        let mut col = 0;
        while let Some(mut card) = deck.deal_one() {
            card.face_up = true;
            if let Some(pile) = state.pile_mut(tableau[col]) {
                pile.push(card);
            }
            col = (col + 1) % tableau.len();
        }
        debug_assert_eq!(state.total_cards(), 52);

        debug!("freecell deal complete, seed={seed}");

        Self { state, freecells, foundations, tableau }
    }

    #[must_use]
    pub fn freecell_ids(&self) -> &[PileId; 4] {
        &self.freecells
    }

    #[must_use]
    pub fn foundation_ids(&self) -> &[PileId; 4] {
        &self.foundations
    }

    #[must_use]
    pub fn tableau_ids(&self) -> &[PileId; 8] {
        &self.tableau
    }

    /// Largest run movable onto `target` right now.
    #[must_use]
    pub fn max_movable(&self, target: PileId) -> usize {
        let empty_cells = self
            .freecells
            .iter()
            .filter(|&&c| self.state.pile(c).is_some_and(|p| p.is_empty()))
            .count();
        let empty_columns = self
            .tableau
            .iter()
            .filter(|&&t| t != target && self.state.pile(t).is_some_and(|p| p.is_empty()))
            .count();
        (1 + empty_cells) << empty_columns
    }
}

impl GameRule for Freecell {
    fn variant(&self) -> VariantId {
        VariantId::Freecell
    }

    fn game_id(&self) -> &'static str {
        "freecell"
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn can_move(&self, cards: &[Card], from: Option<PileId>, to: PileId) -> bool {
        if rejects_baseline(cards, from, to) {
            return false;
        }
        let Some(target) = self.state.pile(to) else {
            return false;
        };

        match target.kind() {
            PileKind::Foundation => cards.len() == 1 && foundation_accepts(target, cards[0]),
            PileKind::Freecell => cards.len() == 1 && target.is_empty(),
            PileKind::Tableau => {
                if !is_alternating_run(cards) || cards.len() > self.max_movable(to) {
                    return false;
                }
                target.is_empty() || tableau_accepts_alternating(target, cards[0])
            }
            _ => false,
        }
    }

    fn on_move(&mut self, _cards: &[Card], _from: PileId, _to: PileId) {
        // Everything is face up; nothing to flip or collect.
    }

    fn on_stock_click(&mut self) {
        // No stock in FreeCell.
    }

    fn board_layout(&self) -> BoardLayout {
        let mut slots = Vec::with_capacity(16);
        for (i, &c) in self.freecells.iter().enumerate() {
            slots.push(BoardSlot {
                pile: c,
                kind: PileKind::Freecell,
                column: i as u8,
                row: 0,
                fanned: false,
            });
        }
        for (i, &f) in self.foundations.iter().enumerate() {
            slots.push(BoardSlot {
                pile: f,
                kind: PileKind::Foundation,
                column: 4 + i as u8,
                row: 0,
                fanned: false,
            });
        }
        for (i, &t) in self.tableau.iter().enumerate() {
            slots.push(BoardSlot {
                pile: t,
                kind: PileKind::Tableau,
                column: i as u8,
                row: 1,
                fanned: true,
            });
        }
        BoardLayout { columns: 8, slots }
    }
}
