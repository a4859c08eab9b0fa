/// Game configuration constants.
/// 
/// This module defines the board growth and ship placement parameters.
pub const MIN_BOARD_SIZE: u32 = 5; // Smallest board side, used for level 1.

/// Ships granted on top of the level number (level 1 gets 3 ships).
pub const EXTRA_SHIPS: u32 = 2;

/// Random placement attempts allowed per requested ship.
pub const PLACEMENT_ATTEMPTS_PER_SHIP: u32 = 10;

/// Level assigned to a player on their first game.
pub const STARTING_LEVEL: u32 = 1;

/// Name used when a player starts without typing one.
pub const DEFAULT_PLAYER_NAME: &str = "Player";
