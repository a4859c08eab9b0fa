use serde::{Serialize, Deserialize};

/// Marker held by a single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "CellStateRepr")]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// Hit and Miss are final: a resolved cell never changes again.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// Saved files carry the state either as its name or as the numeric index
/// written by older builds.
#[derive(Deserialize)]
#[serde(untagged)]
enum CellStateRepr {
    Index(u8),
    Name(String),
}

impl TryFrom<CellStateRepr> for CellState {
    type Error = String;

    fn try_from(repr: CellStateRepr) -> Result<Self, Self::Error> {
        match repr {
            CellStateRepr::Index(0) => Ok(CellState::Empty),
            CellStateRepr::Index(1) => Ok(CellState::Ship),
            CellStateRepr::Index(2) => Ok(CellState::Hit),
            CellStateRepr::Index(3) => Ok(CellState::Miss),
            CellStateRepr::Index(other) => Err(format!("unknown cell state index {other}")),
            CellStateRepr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "empty" => Ok(CellState::Empty),
                "ship" => Ok(CellState::Ship),
                "hit" => Ok(CellState::Hit),
                "miss" => Ok(CellState::Miss),
                _ => Err(format!("unknown cell state {name:?}")),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    #[serde(default)]
    pub state: CellState,
}

/// Square grid of `size * size` cells, stored column by column
/// (every `y` of `x = 0`, then `x = 1`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub size: usize,
    pub cells: Vec<Cell>,
}

impl Board {
    /// Create a board of empty cells covering the whole grid.
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|x| (0..size).map(move |y| Cell { x, y, state: CellState::Empty }))
            .collect();
        Self { size, cells }
    }

    /// Look a cell up by coordinates. Loaded boards may list their cells in
    /// any order, so this scans rather than indexing.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.iter().find(|c| c.x == x && c.y == y)
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.x == x && c.y == y)
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self { name: name.into(), level }
    }
}

/// The unit the store saves and loads: a player and their current board.
///
/// `board` is only `None` for records migrated from the legacy player-only
/// file format; starting a game on such a record generates a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player: Player,
    #[serde(default)]
    pub board: Option<Board>,
}

impl PlayerState {
    pub fn new(player: Player, board: Board) -> Self {
        Self { player, board: Some(board) }
    }

    /// Ships still afloat. A missing board has none.
    pub fn ships_remaining(&self) -> usize {
        self.board.as_ref().map_or(0, |b| b.count(CellState::Ship))
    }
}
