//! The mutable aggregate for one game session.
//!
//! `GameState` owns every pile, the move counter, the session clock,
//! the win flag, and the undo stack. Undo is snapshot-based: before any
//! mutating action the orchestrator pushes a deep value capture of all
//! piles, and undo restores pile contents from the most recent capture.
//! With at most 104 cards on the table an O(cards) snapshot per move is
//! cheap, and value snapshots cannot dangle the way inverse-operation
//! logs can.
//!
//! The undo stack is uncapped: snapshots are small and a session rarely
//! exceeds a few hundred moves.

use std::time::{Duration, Instant};

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::piles::{CardRun, Pile, PileId, PileKind};

/// Value capture of one pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileSnapshot {
    pub id: PileId,
    pub kind: PileKind,
    pub cards: Vec<Card>,
}

/// Value capture of the whole table plus the move counter at capture
/// time. Independent of object identity; suitable for storage and
/// comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub piles: Vec<PileSnapshot>,
    pub move_count: u32,
}

impl Snapshot {
    /// The `(id, kind)` shape of the captured layout, in registration
    /// order. Used to validate restored games against a fresh deal.
    #[must_use]
    pub fn structure(&self) -> Vec<(PileId, PileKind)> {
        self.piles.iter().map(|p| (p.id, p.kind)).collect()
    }
}

/// All piles for one game session, plus bookkeeping.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Piles in registration order. Scan order for foundations and
    /// tableaus is this order.
    piles: Vec<Pile>,
    /// Pile lookup by id.
    index: FxHashMap<PileId, usize>,
    /// Successful moves so far.
    pub move_count: u32,
    /// Set once when the win condition first holds; cleared only by
    /// undo recomputation.
    pub won: bool,
    start: Instant,
    /// Play time accumulated before this process (restored games).
    elapsed_offset: Duration,
    undo_stack: Vector<Snapshot>,
    next_pile_id: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty state with the clock started.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: Vec::new(),
            index: FxHashMap::default(),
            move_count: 0,
            won: false,
            start: Instant::now(),
            elapsed_offset: Duration::ZERO,
            undo_stack: Vector::new(),
            next_pile_id: 0,
        }
    }

    // === Piles ===

    /// Register a new empty pile and return its id.
    pub fn add_pile(&mut self, kind: PileKind) -> PileId {
        let id = PileId::new(self.next_pile_id);
        self.next_pile_id += 1;
        self.index.insert(id, self.piles.len());
        self.piles.push(Pile::new(id, kind));
        id
    }

    /// Look up a pile by id.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.index.get(&id).map(|&i| &self.piles[i])
    }

    /// Look up a pile mutably by id.
    pub fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        self.index.get(&id).map(|&i| &mut self.piles[i])
    }

    /// All piles in registration order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Piles of one kind, in registration order.
    pub fn piles_of(&self, kind: PileKind) -> impl Iterator<Item = &Pile> {
        self.piles.iter().filter(move |p| p.kind() == kind)
    }

    /// Ids of piles of one kind, in registration order.
    #[must_use]
    pub fn pile_ids_of(&self, kind: PileKind) -> Vec<PileId> {
        self.piles_of(kind).map(Pile::id).collect()
    }

    /// Total cards on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Move the run starting at `start` in `from` onto the top of `to`.
    ///
    /// An exclusive transfer: the cards leave `from` and arrive on `to`
    /// in the same relative order. Returns the moved run, or `None` if
    /// either pile is unknown or the index is out of bounds. Performs
    /// no legality checking.
    pub fn transfer_run(&mut self, from: PileId, start: usize, to: PileId) -> Option<CardRun> {
        let (&fi, &ti) = (self.index.get(&from)?, self.index.get(&to)?);
        if start >= self.piles[fi].len() || fi == ti {
            return None;
        }
        let run = self.piles[fi].take_from(start);
        self.piles[ti].push_many(run.iter().copied());
        Some(run)
    }

    // === Snapshots and undo ===

    /// Deep value capture of every pile plus the current move count.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            piles: self
                .piles
                .iter()
                .map(|p| PileSnapshot {
                    id: p.id(),
                    kind: p.kind(),
                    cards: p.cards().to_vec(),
                })
                .collect(),
            move_count: self.move_count,
        }
    }

    /// Restore pile contents and move count from a snapshot.
    ///
    /// Pile ids in the snapshot must match registered piles; callers
    /// validate structure first (restore) or hold it by construction
    /// (undo).
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        for pile_snap in &snapshot.piles {
            if let Some(&i) = self.index.get(&pile_snap.id) {
                self.piles[i].set_cards(pile_snap.cards.clone());
            } else {
                debug_assert!(false, "snapshot references unknown pile {}", pile_snap.id);
            }
        }
        self.move_count = snapshot.move_count;
    }

    /// Capture the current state onto the undo stack. Call before any
    /// mutating action.
    pub fn push_undo(&mut self) {
        let snap = self.snapshot();
        self.undo_stack.push_back(snap);
    }

    /// Remove and return the most recent undo capture.
    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo_stack.pop_back()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    // === Clock ===

    /// Play time so far, including time carried over by a restore.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed_offset + self.start.elapsed()
    }

    /// Carry accumulated play time into this session (restore).
    pub fn set_elapsed_offset(&mut self, offset: Duration) {
        self.elapsed_offset = offset;
        self.start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: u8, face_up: bool) -> Card {
        let mut c = Card::new(Suit::Hearts, rank);
        c.face_up = face_up;
        c
    }

    fn two_pile_state() -> (GameState, PileId, PileId) {
        let mut state = GameState::new();
        let a = state.add_pile(PileKind::Tableau);
        let b = state.add_pile(PileKind::Tableau);
        (state, a, b)
    }

    #[test]
    fn test_add_and_lookup() {
        let (state, a, b) = two_pile_state();
        assert_ne!(a, b);
        assert_eq!(state.pile(a).unwrap().kind(), PileKind::Tableau);
        assert!(state.pile(PileId::new(99)).is_none());
        assert_eq!(state.piles().len(), 2);
    }

    #[test]
    fn test_piles_of_registration_order() {
        let mut state = GameState::new();
        let f1 = state.add_pile(PileKind::Foundation);
        let t = state.add_pile(PileKind::Tableau);
        let f2 = state.add_pile(PileKind::Foundation);

        let found = state.pile_ids_of(PileKind::Foundation);
        assert_eq!(found, vec![f1, f2]);
        assert_eq!(state.pile_ids_of(PileKind::Tableau), vec![t]);
    }

    #[test]
    fn test_transfer_run_is_exclusive() {
        let (mut state, a, b) = two_pile_state();
        state
            .pile_mut(a)
            .unwrap()
            .push_many([card(9, true), card(8, true), card(7, true)]);

        let run = state.transfer_run(a, 1, b).unwrap();
        assert_eq!(run.len(), 2);
        assert_eq!(state.pile(a).unwrap().len(), 1);
        assert_eq!(
            state.pile(b).unwrap().cards(),
            &[card(8, true), card(7, true)]
        );
    }

    #[test]
    fn test_transfer_run_rejects_bad_args() {
        let (mut state, a, b) = two_pile_state();
        state.pile_mut(a).unwrap().push(card(5, true));

        assert!(state.transfer_run(a, 1, b).is_none()); // index out of bounds
        assert!(state.transfer_run(a, 0, a).is_none()); // from == to
        assert!(state.transfer_run(PileId::new(42), 0, b).is_none());
        assert_eq!(state.pile(a).unwrap().len(), 1);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let (mut state, a, b) = two_pile_state();
        state.pile_mut(a).unwrap().push(card(13, false));
        state.move_count = 3;

        let snap = state.snapshot();

        state.transfer_run(a, 0, b);
        state.pile_mut(b).unwrap().flip_top(true);
        state.move_count = 4;

        state.apply_snapshot(&snap);
        assert_eq!(state.snapshot(), snap);
        assert_eq!(state.move_count, 3);
        assert!(state.pile(b).unwrap().is_empty());
    }

    #[test]
    fn test_undo_stack_discipline() {
        let (mut state, a, _) = two_pile_state();
        assert!(!state.can_undo());

        state.push_undo();
        state.pile_mut(a).unwrap().push(card(1, true));
        state.push_undo();
        assert_eq!(state.undo_depth(), 2);

        let top = state.pop_undo().unwrap();
        assert_eq!(top.piles[0].cards.len(), 1);
        let bottom = state.pop_undo().unwrap();
        assert!(bottom.piles[0].cards.is_empty());
        assert!(state.pop_undo().is_none());
    }

    #[test]
    fn test_snapshot_structure() {
        let (state, a, b) = two_pile_state();
        let structure = state.snapshot().structure();
        assert_eq!(
            structure,
            vec![(a, PileKind::Tableau), (b, PileKind::Tableau)]
        );
    }

    #[test]
    fn test_elapsed_offset() {
        let mut state = GameState::new();
        state.set_elapsed_offset(Duration::from_secs(90));
        assert!(state.elapsed() >= Duration::from_secs(90));
    }

    #[test]
    fn test_snapshot_serde() {
        let (mut state, a, _) = two_pile_state();
        state.pile_mut(a).unwrap().push(card(12, true));
        let snap = state.snapshot();

        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
