// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the game session, which in turn owns the store handle.
//! Cloned into every actix worker through `web::Data`.

use std::sync::Arc;

use crate::game::session::GameSession;
use crate::store::GameStore;

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    /// Game session handler backed by the configured store.
    pub session: GameSession,
}

impl AppState {
    /// Create a new AppState serving games from `store`.
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        AppState {
            session: GameSession::new(store),
        }
    }
}
