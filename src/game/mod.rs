pub mod types;
pub mod board;
pub mod rules;
pub mod session;

pub use types::*;
pub use session::{GameSession, GameError, GameView, ShotReport};
pub use rules::ShotOutcome;
