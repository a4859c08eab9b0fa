//! Persistence for player states.
//!
//! Records are keyed by player name, compared case-insensitively. Lookups
//! match the whole name; deduplication also ignores surrounding whitespace.
//! The game logic only sees the [`GameStore`] trait; the server plugs in the
//! [`JsonFileStore`], tests use the [`InMemoryStore`].

pub mod error;
pub mod json_file;
pub mod memory;

use std::collections::HashMap;

use crate::game::types::PlayerState;

pub use error::StoreError;
pub use json_file::{JsonFileStore, LoadOutcome};
pub use memory::InMemoryStore;

/// Key-value access to saved games.
pub trait GameStore: Send + Sync {
    /// Every record, deduplicated.
    fn load_all(&self) -> Result<Vec<PlayerState>, StoreError>;

    /// Record for `name`, if any. Blank names never match.
    fn get(&self, name: &str) -> Result<Option<PlayerState>, StoreError>;

    /// Replace the record with the same name or append a new one.
    /// States with a blank player name are ignored.
    fn upsert(&self, state: &PlayerState) -> Result<(), StoreError>;

    /// Delete the record for `name`. Returns whether one existed.
    fn remove(&self, name: &str) -> Result<bool, StoreError>;
}

/// Grouping key used when collapsing duplicate records.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive exact name match used by lookups.
pub fn same_player(state: &PlayerState, name: &str) -> bool {
    state.player.name.to_lowercase() == name.to_lowercase()
}

/// Collapse records sharing a name. The survivor keeps the position of the
/// first occurrence and the contents of the last; blank names are dropped.
pub fn dedupe(states: Vec<PlayerState>) -> Vec<PlayerState> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<PlayerState> = Vec::with_capacity(states.len());

    for state in states {
        let key = name_key(&state.player.name);
        match positions.get(&key) {
            Some(&idx) => deduped[idx] = state,
            None => {
                positions.insert(key, deduped.len());
                deduped.push(state);
            }
        }
    }

    deduped.retain(|s| !s.player.name.trim().is_empty());
    deduped
}

/// Shared upsert step: swap in `state` over its namesake or append it,
/// then dedupe the whole set.
pub(crate) fn merge(mut states: Vec<PlayerState>, state: &PlayerState) -> Vec<PlayerState> {
    match states.iter_mut().find(|s| same_player(s, &state.player.name)) {
        Some(existing) => {
            existing.player = state.player.clone();
            existing.board = state.board.clone();
        }
        None => states.push(state.clone()),
    }
    dedupe(states)
}
