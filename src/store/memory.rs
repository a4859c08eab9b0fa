use std::sync::{Mutex, PoisonError};

use crate::game::types::PlayerState;
use super::{GameStore, StoreError, dedupe, merge, same_player};

/// Volatile store with the same lookup and dedupe rules as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    states: Mutex<Vec<PlayerState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, applying the same dedupe a file load would.
    pub fn with_states(states: Vec<PlayerState>) -> Self {
        Self {
            states: Mutex::new(dedupe(states)),
        }
    }
}

impl GameStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<PlayerState>, StoreError> {
        let states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(states.clone())
    }

    fn get(&self, name: &str) -> Result<Option<PlayerState>, StoreError> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(states.iter().find(|s| same_player(s, name)).cloned())
    }

    fn upsert(&self, state: &PlayerState) -> Result<(), StoreError> {
        if state.player.name.trim().is_empty() {
            return Ok(());
        }
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        let current = std::mem::take(&mut *states);
        *states = merge(current, state);
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<bool, StoreError> {
        if name.trim().is_empty() {
            return Ok(false);
        }
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        match states.iter().position(|s| same_player(s, name)) {
            Some(idx) => {
                states.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
