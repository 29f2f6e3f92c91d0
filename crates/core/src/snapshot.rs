use crate::engine::ActivePiece;
use crate::types::{PieceKind, Rotation, RoundState, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    pub fn cells(&self) -> crate::engine::PieceCells {
        crate::engine::candidate_cells(self.kind, self.rotation, (self.x, self.y))
    }
}

/// Committed game state at one point of the mutation stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub state: RoundState,
    /// Rounds started since boot
    pub round: u32,
    /// Rows cleared in the current round
    pub rows_cleared: u32,
    pub active: Option<ActiveSnapshot>,
    /// Bit `x` of `rows[y]` is set when (x, y) holds a locked cell.
    pub rows: [u16; GRID_HEIGHT as usize],
}

impl GameSnapshot {
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return false;
        }
        self.rows[y as usize] & (1 << x) != 0
    }

    pub fn occupied_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    pub fn running(&self) -> bool {
        self.state == RoundState::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            state: RoundState::Idle,
            round: 0,
            rows_cleared: 0,
            active: None,
            rows: [0; GRID_HEIGHT as usize],
        }
    }
}
