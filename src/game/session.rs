//! Game session handling.
//!
//! A player's game moves through `no record -> active -> all ships destroyed
//! -> active on the next level -> ...`. Each call loads the player's state
//! from the store, applies one transition and writes it straight back; no
//! session state outlives the call.

use std::sync::Arc;
use serde::Serialize;
use thiserror::Error;
use log::{debug, info};

use crate::config::game::{DEFAULT_PLAYER_NAME, STARTING_LEVEL};
use crate::game::board::generate_board;
use crate::game::rules::{resolve_shot, ships_remaining, all_ships_destroyed, ShotOutcome};
use crate::game::types::{Board, CellState, Player, PlayerState};
use crate::store::{GameStore, StoreError};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no player name supplied")]
    MissingPlayer,
    #[error("no saved game for this player")]
    PlayerNotFound,
    #[error("no cell at the given coordinates")]
    CellNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GameError {
    /// Code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::MissingPlayer => "MissingPlayer",
            GameError::PlayerNotFound => "PlayerNotFound",
            GameError::CellNotFound => "CellNotFound",
            GameError::Store(_) => "StoreUnavailable",
        }
    }
}

/// Snapshot sent to the client after start and level changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub player_name: String,
    pub level: u32,
    pub ships_remaining: usize,
    /// Board with ship positions hidden; hits and misses are shown.
    pub board: Board,
}

impl GameView {
    fn from_state(state: &PlayerState) -> Self {
        let board = state
            .board
            .as_ref()
            .map(masked)
            .unwrap_or_else(|| Board::new(0));
        Self {
            player_name: state.player.name.clone(),
            level: state.player.level,
            ships_remaining: state.ships_remaining(),
            board,
        }
    }
}

fn masked(board: &Board) -> Board {
    let mut board = board.clone();
    for cell in board.cells.iter_mut().filter(|c| c.state == CellState::Ship) {
        cell.state = CellState::Empty;
    }
    board
}

/// Result of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotReport {
    pub result: ShotOutcome,
    pub ships_remaining: usize,
    /// Set once the last ship is gone: the level `next_level` will move to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level: Option<u32>,
}

#[derive(Clone)]
pub struct GameSession {
    store: Arc<dyn GameStore>,
}

impl GameSession {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    /// Resume the saved game for `name`, or create one on level 1.
    /// A blank name plays as the default player.
    pub fn start(&self, name: &str) -> Result<GameView, GameError> {
        let name = match name.trim() {
            "" => DEFAULT_PLAYER_NAME,
            trimmed => trimmed,
        };

        let state = match self.store.get(name)? {
            Some(mut state) => {
                if state.board.is_none() {
                    // Migrated legacy records only carry the player.
                    info!(
                        "[GameSession] Generating board for migrated player {} (level {})",
                        state.player.name, state.player.level
                    );
                    state.board = Some(generate_board(state.player.level));
                    self.store.upsert(&state)?;
                }
                debug!("[GameSession] Resuming {} on level {}", state.player.name, state.player.level);
                state
            }
            None => {
                let player = Player::new(name, STARTING_LEVEL);
                let board = generate_board(player.level);
                let state = PlayerState::new(player, board);
                self.store.upsert(&state)?;
                info!("[GameSession] New player {}", name);
                state
            }
        };

        Ok(GameView::from_state(&state))
    }

    /// Fire at `(x, y)` on the player's board.
    ///
    /// Resolved cells report `Already` and are not saved again. When the
    /// last ship sinks the report carries the next level, but the level and
    /// board only change on [`GameSession::next_level`].
    pub fn shoot(&self, name: &str, x: i64, y: i64) -> Result<ShotReport, GameError> {
        if name.trim().is_empty() {
            return Err(GameError::MissingPlayer);
        }
        let mut state = self.store.get(name)?.ok_or(GameError::PlayerNotFound)?;

        let (x, y) = match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => return Err(GameError::CellNotFound),
        };
        let board = state.board.as_mut().ok_or(GameError::CellNotFound)?;
        let result = resolve_shot(board, x, y).ok_or(GameError::CellNotFound)?;
        let remaining = ships_remaining(board);
        let cleared = all_ships_destroyed(board);

        debug!(
            "[GameSession] {} shot ({}, {}): {:?}, {} ship(s) left",
            state.player.name, x, y, result, remaining
        );

        if result == ShotOutcome::Already {
            return Ok(ShotReport { result, ships_remaining: remaining, next_level: None });
        }

        self.store.upsert(&state)?;

        let next_level = if cleared {
            info!(
                "[GameSession] {} cleared level {}",
                state.player.name, state.player.level
            );
            Some(state.player.level.saturating_add(1))
        } else {
            None
        };

        Ok(ShotReport { result, ships_remaining: remaining, next_level })
    }

    /// Move the player up one level with a freshly generated board.
    pub fn next_level(&self, name: &str) -> Result<GameView, GameError> {
        if name.trim().is_empty() {
            return Err(GameError::MissingPlayer);
        }
        let mut state = self.store.get(name)?.ok_or(GameError::PlayerNotFound)?;

        state.player.level = state.player.level.saturating_add(1);
        state.board = Some(generate_board(state.player.level));
        self.store.upsert(&state)?;

        info!("[GameSession] {} advanced to level {}", state.player.name, state.player.level);
        Ok(GameView::from_state(&state))
    }

    /// Leave the game. Progress is already saved after every move.
    pub fn quit(&self, name: &str) {
        info!("[GameSession] {} left the game", name.trim());
    }
}
