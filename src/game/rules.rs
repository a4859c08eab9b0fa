use serde::{Serialize, Deserialize};

use crate::game::types::{Board, CellState};

/// What a shot did to the targeted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    Hit,
    Miss,
    /// The cell was already Hit or Miss; nothing changed.
    Already,
}

/// Fire at `(x, y)`. Ship becomes Hit, Empty becomes Miss, resolved cells
/// are left alone. Returns `None` when the board has no such cell.
pub fn resolve_shot(board: &mut Board, x: usize, y: usize) -> Option<ShotOutcome> {
    let cell = board.cell_mut(x, y)?;

    let outcome = match cell.state {
        state if state.is_resolved() => ShotOutcome::Already,
        CellState::Ship => {
            cell.state = CellState::Hit;
            ShotOutcome::Hit
        }
        _ => {
            cell.state = CellState::Miss;
            ShotOutcome::Miss
        }
    };
    Some(outcome)
}

pub fn ships_remaining(board: &Board) -> usize {
    board.count(CellState::Ship)
}

pub fn all_ships_destroyed(board: &Board) -> bool {
    ships_remaining(board) == 0
}
