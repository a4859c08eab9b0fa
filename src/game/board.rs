//! Board generation.
//!
//! Boards grow by one column and one row per level and carry `level + 2`
//! single-cell ships, capped at a quarter of the grid.

use rand::Rng;
use log::debug;

use crate::config::game::{MIN_BOARD_SIZE, EXTRA_SHIPS, PLACEMENT_ATTEMPTS_PER_SHIP};
use crate::game::types::{Board, CellState};

/// Side length of the board for `level`: `max(5, 5 + level - 1)`.
pub fn board_size(level: u32) -> usize {
    MIN_BOARD_SIZE.saturating_add(level).saturating_sub(1).max(MIN_BOARD_SIZE) as usize
}

/// Number of ships requested for `level`: `min(size² / 4, level + 2)`.
pub fn ship_count(level: u32) -> usize {
    let size = board_size(level);
    (size * size / 4).min(level as usize + EXTRA_SHIPS as usize)
}

/// Generate the board for `level` with the thread-local RNG.
pub fn generate_board(level: u32) -> Board {
    generate_board_with(level, &mut rand::rng())
}

/// Generate the board for `level`, scattering ships by uniform sampling.
///
/// Every sample costs one attempt, including samples that land on a ship
/// already placed. Once `ships * 10` attempts are spent the board is
/// returned as is, possibly with fewer ships than requested.
pub fn generate_board_with<R: Rng>(level: u32, rng: &mut R) -> Board {
    let size = board_size(level);
    let mut board = Board::new(size);

    let wanted = ship_count(level);
    let max_attempts = wanted * PLACEMENT_ATTEMPTS_PER_SHIP as usize;
    let mut placed = 0;
    let mut attempts = 0;

    while placed < wanted && attempts < max_attempts {
        let x = rng.random_range(0..size);
        let y = rng.random_range(0..size);
        if let Some(cell) = board.cell_mut(x, y) {
            if cell.state != CellState::Ship {
                cell.state = CellState::Ship;
                placed += 1;
            }
        }
        attempts += 1;
    }

    if placed < wanted {
        debug!(
            "[BoardGenerator] level={} placed {}/{} ships after {} attempts",
            level, placed, wanted, attempts
        );
    }

    board
}
