// src/server/mod.rs

//! Server layer root module.
//!
//! Thin HTTP/JSON transport over the game session:
//! - Application state shared by handlers
//! - Route table
//! - Request handlers and their message types
//! - Error response helpers

pub mod state;
pub mod router;
pub mod handlers;
pub mod messages;
pub mod http_error;
