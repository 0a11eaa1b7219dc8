//! Move orchestration on top of a rule object.
//!
//! The session receives move intents from an input layer and drives the
//! rule contract: legality check, undo capture, exclusive transfer,
//! post-move hook, bookkeeping, win detection. All mutation is
//! synchronous and originates here; an illegal intent is a boolean
//! rejection with no state change, which is also the engine's only
//! cancellation path.
//!
//! Runs are addressed by position: an intent names `(from_pile,
//! start_index, to_pile)` and the lifted run is everything from
//! `start_index` to the top, resolved once per intent. This stays
//! correct when a pack holds duplicate `(suit, rank)` values.

use std::time::Duration;

use log::{debug, info};

use crate::cards::Card;
use crate::piles::{CardRun, PileId, PileKind};
use crate::rules::GameRule;
use crate::state::GameState;

/// One running game: a rule object plus the orchestration contract.
pub struct GameSession {
    rule: Box<dyn GameRule>,
}

// The rule object is not `Debug`; report the session's identity and
// bookkeeping instead.
impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game_id", &self.game_id())
            .field("move_count", &self.state().move_count)
            .field("won", &self.state().won)
            .finish()
    }
}

impl GameSession {
    #[must_use]
    pub fn new(rule: Box<dyn GameRule>) -> Self {
        Self { rule }
    }

    #[must_use]
    pub fn rule(&self) -> &dyn GameRule {
        self.rule.as_ref()
    }

    pub fn rule_mut(&mut self) -> &mut dyn GameRule {
        self.rule.as_mut()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.rule.state()
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        self.rule.state_mut()
    }

    /// Registry id of the running game.
    #[must_use]
    pub fn game_id(&self) -> &'static str {
        self.rule.game_id()
    }

    /// Play time so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.state().elapsed()
    }

    /// The run that an intent at `(from, start_index)` would lift, if
    /// the position is valid.
    #[must_use]
    pub fn peek_run(&self, from: PileId, start_index: usize) -> Option<CardRun> {
        let pile = self.state().pile(from)?;
        let run = pile.run_from(start_index);
        if run.is_empty() {
            None
        } else {
            Some(CardRun::from_slice(run))
        }
    }

    /// Validate and apply a move intent.
    ///
    /// On success: undo snapshot pushed, cards transferred, `on_move`
    /// invoked, move count incremented, win checked. On failure the
    /// state is untouched.
    pub fn try_move(&mut self, from: PileId, start_index: usize, to: PileId) -> bool {
        let Some(cards) = self.peek_run(from, start_index) else {
            return false;
        };
        if !self.rule.can_move(&cards, Some(from), to) {
            return false;
        }

        self.rule.state_mut().push_undo();
        let moved = self.rule.state_mut().transfer_run(from, start_index, to);
        debug_assert!(moved.is_some(), "legal move failed to transfer");
        self.rule.on_move(&cards, from, to);
        self.rule.state_mut().move_count += 1;
        debug!(
            "moved {} card(s) {from} -> {to}, move_count={}",
            cards.len(),
            self.state().move_count
        );

        self.check_win();
        true
    }

    /// Resolve a tap on `(pile, card_index)` into the first legal
    /// destination, if any.
    ///
    /// Face-down cards never auto-move. A lone top card tries the
    /// foundations first; any run then tries every tableau and finally
    /// every free cell, in registration order.
    pub fn try_auto_move(&mut self, from: PileId, card_index: usize) -> bool {
        let Some(pile) = self.state().pile(from) else {
            return false;
        };
        let Some(card) = pile.get(card_index) else {
            return false;
        };
        if !card.face_up {
            return false;
        }
        let is_top = card_index + 1 == pile.len();

        if is_top {
            if let Some(foundation) = self.rule.find_auto_move_to_foundation(card) {
                if self.try_move(from, card_index, foundation) {
                    return true;
                }
            }
        }

        for kind in [PileKind::Tableau, PileKind::Freecell] {
            for target in self.state().pile_ids_of(kind) {
                if target != from && self.try_move(from, card_index, target) {
                    return true;
                }
            }
        }
        false
    }

    /// Forward a stock tap to the variant, with undo capture and win
    /// check (Spider's dealt row can complete runs).
    pub fn click_stock(&mut self) {
        self.rule.state_mut().push_undo();
        self.rule.on_stock_click();
        self.check_win();
    }

    /// Revert to the state before the last mutating action.
    ///
    /// Restores pile contents and move count from the snapshot, then
    /// recomputes the win flag from the restored piles, so undoing a
    /// winning move un-wins the game. The session clock is not
    /// restored. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.rule.state_mut().pop_undo() else {
            return false;
        };
        self.rule.state_mut().apply_snapshot(&snapshot);
        let won = self.rule.is_won();
        self.rule.state_mut().won = won;
        debug!("undo applied, move_count={}", self.state().move_count);
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.state().can_undo()
    }

    fn check_win(&mut self) {
        if !self.state().won && self.rule.is_won() {
            self.rule.state_mut().won = true;
            info!(
                "game won: {} in {} moves",
                self.rule.game_id(),
                self.state().move_count
            );
        }
    }
}

/// Convenience re-check used by presentation layers after any action.
impl GameSession {
    /// Pure legality probe for a drag in progress.
    #[must_use]
    pub fn can_move(&self, cards: &[Card], from: Option<PileId>, to: PileId) -> bool {
        self.rule.can_move(cards, from, to)
    }
}
