//! Single-player Battleships backend.
//!
//! Players are identified by name; each one owns a saved game (level and
//! board) kept in a flat JSON file. Clearing every ship on a board unlocks
//! the next, larger level.

pub mod config;
pub mod game;
pub mod store;
pub mod server;
