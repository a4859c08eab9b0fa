//! Flat-file JSON store.
//!
//! All saved games live in one pretty-printed JSON array. Every operation
//! reloads the file, works on the full list and writes it back, holding a
//! single store-wide lock for the whole cycle. Concurrent writers for
//! different players therefore serialize; the last write wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use log::{debug, info, warn};
use serde_json::Value;

use crate::config::store::FILE_NAME;
use crate::game::types::{Player, PlayerState};
use super::{GameStore, StoreError, dedupe, merge, same_player};

/// Result of reading the backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Current format, exactly as found in the file (not yet deduplicated).
    Loaded(Vec<PlayerState>),
    /// Legacy player-only format, wrapped into states without a board and
    /// deduplicated.
    Migrated(Vec<PlayerState>),
    /// Missing, blank, or an empty array.
    Empty,
    /// Neither format parses. Carries the parser message for logging.
    Corrupt(String),
}

/// Lower-case every object key so field names match in any casing.
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (key.to_lowercase(), lowercase_keys(inner)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

/// Interpret the raw file contents.
pub fn parse_saved(raw: &str) -> LoadOutcome {
    if raw.trim().is_empty() {
        return LoadOutcome::Empty;
    }

    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => lowercase_keys(value),
        Err(e) => return LoadOutcome::Corrupt(e.to_string()),
    };

    let current_err = match serde_json::from_value::<Vec<PlayerState>>(value.clone()) {
        Ok(states) if !states.is_empty() => return LoadOutcome::Loaded(states),
        Ok(_) => None,
        Err(e) => Some(e),
    };

    match serde_json::from_value::<Vec<Player>>(value) {
        Ok(players) if !players.is_empty() => {
            let states = players
                .into_iter()
                .map(|player| PlayerState { player, board: None })
                .collect();
            LoadOutcome::Migrated(dedupe(states))
        }
        Ok(_) => LoadOutcome::Empty,
        Err(legacy_err) => match current_err {
            Some(e) => LoadOutcome::Corrupt(e.to_string()),
            None => LoadOutcome::Corrupt(legacy_err.to_string()),
        },
    }
}

pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store backed by the file at `path`. Nothing is touched until the
    /// first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store backed by `games.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file without repairing it.
    pub fn load(&self) -> Result<LoadOutcome, StoreError> {
        let _guard = self.acquire();
        self.read_outcome()
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        // The guard protects no data; the file is re-read on every call.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }

    fn read_outcome(&self) -> Result<LoadOutcome, StoreError> {
        self.ensure_dir()?;
        match fs::read(&self.path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(raw) => Ok(parse_saved(&raw)),
                Err(e) => Ok(LoadOutcome::Corrupt(e.to_string())),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(LoadOutcome::Empty),
            Err(e) => Err(e.into()),
        }
    }

    /// Load every record, rewriting the file when duplicates were collapsed
    /// or a legacy file was migrated. Caller holds the lock.
    fn load_locked(&self) -> Result<Vec<PlayerState>, StoreError> {
        match self.read_outcome()? {
            LoadOutcome::Loaded(states) => {
                let found = states.len();
                let deduped = dedupe(states);
                if deduped.len() != found {
                    info!(
                        "[GameStore] Collapsed {} duplicate record(s) in {}",
                        found - deduped.len(),
                        self.path.display()
                    );
                    self.save_locked(&deduped)?;
                }
                Ok(deduped)
            }
            LoadOutcome::Migrated(states) => {
                info!(
                    "[GameStore] Migrated {} legacy player record(s) in {}",
                    states.len(),
                    self.path.display()
                );
                self.save_locked(&states)?;
                Ok(states)
            }
            LoadOutcome::Empty => Ok(Vec::new()),
            LoadOutcome::Corrupt(reason) => {
                // Unreadable saves reset progress instead of failing requests.
                warn!(
                    "[GameStore] Ignoring unparseable store {}: {}",
                    self.path.display(),
                    reason
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_locked(&self, states: &[PlayerState]) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let raw = serde_json::to_string_pretty(states)?;
        fs::write(&self.path, raw)?;
        debug!("[GameStore] Wrote {} record(s) to {}", states.len(), self.path.display());
        Ok(())
    }
}

impl GameStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<PlayerState>, StoreError> {
        let _guard = self.acquire();
        self.load_locked()
    }

    fn get(&self, name: &str) -> Result<Option<PlayerState>, StoreError> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let _guard = self.acquire();
        let states = self.load_locked()?;
        Ok(states.into_iter().find(|s| same_player(s, name)))
    }

    fn upsert(&self, state: &PlayerState) -> Result<(), StoreError> {
        if state.player.name.trim().is_empty() {
            debug!("[GameStore] Ignoring upsert without a player name");
            return Ok(());
        }
        let _guard = self.acquire();
        let states = self.load_locked()?;
        let merged = merge(states, state);
        self.save_locked(&merged)
    }

    fn remove(&self, name: &str) -> Result<bool, StoreError> {
        if name.trim().is_empty() {
            return Ok(false);
        }
        let _guard = self.acquire();
        let mut states = self.load_locked()?;
        match states.iter().position(|s| same_player(s, name)) {
            Some(idx) => {
                states.remove(idx);
                self.save_locked(&states)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
