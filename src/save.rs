//! Versioned saved-game records.
//!
//! A save is a JSON document: schema version, registry game id, the
//! full pile snapshot, move count, elapsed play time, and the win flag.
//! Restore re-deals a fresh game of the same id and overwrites its
//! piles from the snapshot, so a record whose variant is unknown or
//! whose pile layout no longer matches the variant's fresh structure is
//! rejected rather than half-applied.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cards::{RANK_ACE, RANK_KING};
use crate::registry;
use crate::session::GameSession;
use crate::state::Snapshot;

/// Current save schema version.
pub const SAVE_VERSION: u32 = 1;

/// Serializable capture of one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: u32,
    /// Registry id, e.g. `"klondike-3"`.
    pub game_id: String,
    pub snapshot: Snapshot,
    pub move_count: u32,
    pub elapsed_secs: u64,
    pub won: bool,
}

impl SavedGame {
    /// Capture a running session.
    #[must_use]
    pub fn capture(session: &GameSession) -> Self {
        let state = session.state();
        Self {
            version: SAVE_VERSION,
            game_id: session.game_id().to_string(),
            snapshot: state.snapshot(),
            move_count: state.move_count,
            elapsed_secs: state.elapsed().as_secs(),
            won: state.won,
        }
    }

    /// Render as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize saved game")
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("malformed saved game")
    }

    /// Rebuild a session from this record.
    ///
    /// Errors on an unsupported schema version, an unknown game id, a
    /// pile structure that does not match the variant's layout, or card
    /// data the rules could never have produced. Nothing is applied
    /// until every check passes.
    pub fn restore(&self) -> Result<GameSession> {
        if self.version != SAVE_VERSION {
            bail!("unsupported save version {}", self.version);
        }

        // Seed is irrelevant: the deal is overwritten by the snapshot.
        let mut session = registry::create(&self.game_id, 0)?;

        let fresh = session.state().snapshot();
        if fresh.structure() != self.snapshot.structure() {
            bail!("saved pile layout does not match variant {}", self.game_id);
        }

        let saved_cards: usize = self.snapshot.piles.iter().map(|p| p.cards.len()).sum();
        let fresh_cards: usize = fresh.piles.iter().map(|p| p.cards.len()).sum();
        if saved_cards != fresh_cards {
            bail!("saved game holds {saved_cards} cards, expected {fresh_cards}");
        }
        // Serde never runs the rank assertion in `Card::new`, so a
        // hand-edited record could smuggle in ranks the rules choke on.
        if self
            .snapshot
            .piles
            .iter()
            .flat_map(|p| p.cards.iter())
            .any(|c| !(RANK_ACE..=RANK_KING).contains(&c.rank))
        {
            bail!("saved game contains a card with an out-of-range rank");
        }

        let state = session.state_mut();
        state.apply_snapshot(&self.snapshot);
        state.move_count = self.move_count;
        state.won = self.won;
        state.set_elapsed_offset(Duration::from_secs(self.elapsed_secs));
        Ok(session)
    }
}
