/// Main configuration module.
/// 
/// Re-exports submodules for game, store and server configuration.
pub mod game;
pub mod store;
pub mod server;
