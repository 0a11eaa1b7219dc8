//! Klondike: seven tableau columns, a draw stock with waste, four
//! foundations.
//!
//! Tableau builds down in alternating colors, foundations build up by
//! suit. The stock deals `draw_count` cards (1 or 3, fixed at
//! construction) onto the waste; clicking an empty stock recycles the
//! waste face-down.

use log::debug;

use crate::cards::{Card, Deck};
use crate::core::GameRng;
use crate::piles::{PileId, PileKind};
use crate::rules::layout::{BoardLayout, BoardSlot};
use crate::rules::sequence::foundation_accepts;
use crate::rules::{rejects_baseline, tableau_accepts_alternating, GameRule, VariantId};
use crate::state::GameState;

/// Klondike rule object.
pub struct Klondike {
    state: GameState,
    draw_count: u8,
    stock: PileId,
    waste: PileId,
    foundations: [PileId; 4],
    tableau: [PileId; 7],
}

impl Klondike {
    /// Deal a fresh game from a seed.
    ///
    /// `draw_count` must be 1 or 3.
    #[must_use]
    pub fn new(seed: u64, draw_count: u8) -> Self {
        assert!(draw_count == 1 || draw_count == 3, "draw_count must be 1 or 3");

        let mut state = GameState::new();
        let stock = state.add_pile(PileKind::Stock);
        let waste = state.add_pile(PileKind::Waste);
        let foundations = std::array::from_fn(|_| state.add_pile(PileKind::Foundation));
        let tableau = std::array::from_fn(|_| state.add_pile(PileKind::Tableau));

        let mut deck = Deck::standard_52();
        deck.shuffle(&mut GameRng::new(seed));

        // Column i gets i+1 cards, only the last face up.
        for (i, &col) in tableau.iter().enumerate() {
            let cards = deck.deal(i + 1);
            assert_eq!(cards.len(), i + 1, "deck exhausted during tableau deal");
            if let Some(pile) = state.pile_mut(col) {
                pile.push_many(cards);
                pile.flip_top(true);
            }
        }

        let rest = deck.deal(24);
        assert_eq!(rest.len(), 24, "deck exhausted during stock deal");
        if let Some(pile) = state.pile_mut(stock) {
            pile.push_many(rest);
        }
        debug_assert_eq!(state.total_cards(), 52);

        debug!("klondike deal complete, seed={seed} draw={draw_count}");

        Self { state, draw_count, stock, waste, foundations, tableau }
    }

    #[must_use]
    pub fn draw_count(&self) -> u8 {
        self.draw_count
    }

    #[must_use]
    pub fn stock_id(&self) -> PileId {
        self.stock
    }

    #[must_use]
    pub fn waste_id(&self) -> PileId {
        self.waste
    }

    #[must_use]
    pub fn foundation_ids(&self) -> &[PileId; 4] {
        &self.foundations
    }

    #[must_use]
    pub fn tableau_ids(&self) -> &[PileId; 7] {
        &self.tableau
    }
}

impl GameRule for Klondike {
    fn variant(&self) -> VariantId {
        VariantId::Klondike
    }

    fn game_id(&self) -> &'static str {
        if self.draw_count == 3 {
            "klondike-3"
        } else {
            "klondike"
        }
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
        if !cards.iter().all(|c| c.face_up) {
            return false;
        }
        // Waste and foundations release one card at a time.
        if let Some(source) = from.and_then(|id| self.state.pile(id)) {
            if source.kind() != PileKind::Tableau && cards.len() > 1 {
                return false;
            }
        }
        let Some(target) = self.state.pile(to) else {
            return false;
        };

        match target.kind() {
            PileKind::Foundation => cards.len() == 1 && foundation_accepts(target, cards[0]),
            PileKind::Tableau => tableau_accepts_alternating(target, cards[0]),
            _ => false,
        }
    }

    fn on_move(&mut self, _cards: &[Card], from: PileId, _to: PileId) {
        // Expose the card uncovered in the source column.
        let Some(source) = self.state.pile_mut(from) else {
            return;
        };
        if source.kind() == PileKind::Tableau {
            if let Some(top) = source.top() {
                if !top.face_up {
                    source.flip_top(true);
                }
            }
        }
    }

    fn on_stock_click(&mut self) {
        let stock_empty = self.state.pile(self.stock).map_or(true, |p| p.is_empty());

        if stock_empty {
            // Recycle: waste back onto stock in pop order, face down.
            let mut recycled = 0u32;
            loop {
                let Some(mut card) = self.state.pile_mut(self.waste).and_then(|w| w.pop())
                else {
                    break;
                };
                card.face_up = false;
                if let Some(stock) = self.state.pile_mut(self.stock) {
                    stock.push(card);
                }
                recycled += 1;
            }
            if recycled > 0 {
                debug!("recycled {recycled} waste cards into stock");
            }
        } else {
            for _ in 0..self.draw_count {
                let Some(mut card) = self.state.pile_mut(self.stock).and_then(|s| s.pop())
                else {
                    break;
                };
                card.face_up = true;
                if let Some(waste) = self.state.pile_mut(self.waste) {
                    waste.push(card);
                }
            }
        }
    }

    fn board_layout(&self) -> BoardLayout {
        let mut slots = vec![
            BoardSlot { pile: self.stock, kind: PileKind::Stock, column: 0, row: 0, fanned: false },
            BoardSlot { pile: self.waste, kind: PileKind::Waste, column: 1, row: 0, fanned: false },
        ];
        for (i, &f) in self.foundations.iter().enumerate() {
            slots.push(BoardSlot {
                pile: f,
                kind: PileKind::Foundation,
                column: 3 + i as u8,
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
        BoardLayout { columns: 7, slots }
    }
}
