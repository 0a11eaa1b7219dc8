//! Spider: ten tableau columns, a dealing stock, eight foundations.
//!
//! Player moves only target tableau piles; foundations fill themselves.
//! A moved run must be one suit descending, and whenever a full
//! King-through-Ace suit surfaces on a tableau it is collected onto the
//! first empty foundation immediately, inside the same `on_move` or
//! `on_stock_click` that produced it.

use log::debug;

use crate::cards::{Card, Deck, SpiderSuits};
use crate::core::GameRng;
use crate::piles::{PileId, PileKind};
use crate::rules::layout::{BoardLayout, BoardSlot};
use crate::rules::sequence::{has_completed_run, is_same_suit_run};
use crate::rules::{rejects_baseline, GameRule, VariantId};
use crate::state::GameState;

/// Spider rule object.
pub struct Spider {
    state: GameState,
    suits: SpiderSuits,
    stock: PileId,
    foundations: [PileId; 8],
    tableau: [PileId; 10],
}

impl Spider {
    /// Deal a fresh game from a seed.
    #[must_use]
    pub fn new(seed: u64, suits: SpiderSuits) -> Self {
        let mut state = GameState::new();
        let stock = state.add_pile(PileKind::Stock);
        let foundations = std::array::from_fn(|_| state.add_pile(PileKind::Foundation));
        let tableau = std::array::from_fn(|_| state.add_pile(PileKind::Tableau));

        let mut deck = Deck::spider(suits);
        deck.shuffle(&mut GameRng::new(seed));

        // First four columns get six cards, the rest five; tops face up.
        for (i, &col) in tableau.iter().enumerate() {
            let count = if i < 4 { 6 } else { 5 };
            let cards = deck.deal(count);
            assert_eq!(cards.len(), count, "deck exhausted during tableau deal");
            if let Some(pile) = state.pile_mut(col) {
                pile.push_many(cards);
                pile.flip_top(true);
            }
        }

        let rest = deck.deal(50);
        assert_eq!(rest.len(), 50, "deck exhausted during stock deal");
        if let Some(pile) = state.pile_mut(stock) {
            pile.push_many(rest);
        }
        debug_assert_eq!(state.total_cards(), 104);

        debug!("spider deal complete, seed={seed} suits={suits:?}");

        Self { state, suits, stock, foundations, tableau }
    }

    #[must_use]
    pub fn suits(&self) -> SpiderSuits {
        self.suits
    }

    #[must_use]
    pub fn stock_id(&self) -> PileId {
        self.stock
    }

    #[must_use]
    pub fn foundation_ids(&self) -> &[PileId; 8] {
        &self.foundations
    }

    #[must_use]
    pub fn tableau_ids(&self) -> &[PileId; 10] {
        &self.tableau
    }

    /// Collect a completed King-through-Ace run from `pile` onto the
    /// first empty foundation, then expose the card left behind.
    fn collect_completed_run(&mut self, pile: PileId) {
        let Some(source) = self.state.pile(pile) else {
            return;
        };
        if !has_completed_run(source) {
            return;
        }
        let start = source.len() - 13;

        let Some(target) = self
            .state
            .piles_of(PileKind::Foundation)
            .find(|f| f.is_empty())
            .map(crate::piles::Pile::id)
        else {
            debug_assert!(false, "completed run with no empty foundation");
            return;
        };

        if let Some(run) = self.state.transfer_run(pile, start, target) {
            debug!("collected completed {} run from {pile}", run[0].suit.short());
        }
        if let Some(source) = self.state.pile_mut(pile) {
            if source.top().is_some_and(|c| !c.face_up) {
                source.flip_top(true);
            }
        }
    }
}

impl GameRule for Spider {
    fn variant(&self) -> VariantId {
        VariantId::Spider
    }

    fn game_id(&self) -> &'static str {
        match self.suits {
            SpiderSuits::One => "spider",
            SpiderSuits::Two => "spider-2",
            SpiderSuits::Four => "spider-4",
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
        let Some(target) = self.state.pile(to) else {
            return false;
        };
        // Foundations fill only through automatic collection.
        if target.kind() != PileKind::Tableau {
            return false;
        }
        if !cards.iter().all(|c| c.face_up) || !is_same_suit_run(cards) {
            return false;
        }

        match target.top() {
            None => true,
            // Target suit is irrelevant; only rank adjacency matters.
            Some(top) => cards[0].rank + 1 == top.rank,
        }
    }

    fn on_move(&mut self, _cards: &[Card], from: PileId, to: PileId) {
        if let Some(source) = self.state.pile_mut(from) {
            if source.kind() == PileKind::Tableau && source.top().is_some_and(|c| !c.face_up) {
                source.flip_top(true);
            }
        }
        self.collect_completed_run(to);
    }

    fn on_stock_click(&mut self) {
        let stock_empty = self.state.pile(self.stock).map_or(true, |p| p.is_empty());
        if stock_empty {
            return;
        }
        // A row may only be dealt onto a full board.
        if self.tableau.iter().any(|&t| self.state.pile(t).map_or(true, |p| p.is_empty())) {
            debug!("spider deal refused: empty tableau column");
            return;
        }

        for &col in &self.tableau {
            let Some(mut card) = self.state.pile_mut(self.stock).and_then(|s| s.pop()) else {
                break;
            };
            card.face_up = true;
            if let Some(pile) = self.state.pile_mut(col) {
                pile.push(card);
            }
        }

        for col in self.tableau {
            self.collect_completed_run(col);
        }
    }

    fn board_layout(&self) -> BoardLayout {
        let mut slots = vec![BoardSlot {
            pile: self.stock,
            kind: PileKind::Stock,
            column: 0,
            row: 0,
            fanned: false,
        }];
        for (i, &f) in self.foundations.iter().enumerate() {
            slots.push(BoardSlot {
                pile: f,
                kind: PileKind::Foundation,
                column: 2 + i as u8,
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
        BoardLayout { columns: 10, slots }
    }
}
