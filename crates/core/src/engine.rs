//! Block engine - the active piece and every mutation that touches it
//!
//! The engine owns the [`Grid`], the active piece and the [`Painter`] that mirrors
//! them. Every operation validates first and mutates second, so a rejected move or
//! rotation leaves state and display untouched. Committed changes are painted
//! immediately, one call per changed cell.

use crate::grid::Grid;
use crate::pieces::offsets;
use crate::render::Painter;
use crate::sweep;
use crate::types::{Coord, PieceKind, Rotation, GRID_HEIGHT, GRID_WIDTH, SPAWN_ANCHOR};

/// Absolute cells covered by a piece
pub type PieceCells = [Coord; 4];

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn anchor in rotation 0
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_ANCHOR.0,
            y: SPAWN_ANCHOR.1,
        }
    }

    pub fn anchor(&self) -> Coord {
        (self.x, self.y)
    }

    /// Current absolute cells, recomputed from anchor and catalog
    pub fn cells(&self) -> PieceCells {
        candidate_cells(self.kind, self.rotation, self.anchor())
    }
}

/// Absolute cells a piece would cover with the given rotation and anchor.
pub fn candidate_cells(kind: PieceKind, rotation: Rotation, anchor: Coord) -> PieceCells {
    offsets(kind, rotation).map(|(dx, dy)| (anchor.0 + dx, anchor.1 + dy))
}

/// True iff every cell is on the grid and unoccupied.
pub fn is_valid(grid: &Grid, cells: &PieceCells) -> bool {
    cells
        .iter()
        .all(|&(x, y)| Grid::in_bounds(x, y) && !grid.is_occupied(x, y))
}

/// True iff any cell sits on the bottom row or has an occupied cell directly below.
pub fn collision(grid: &Grid, cells: &PieceCells) -> bool {
    cells
        .iter()
        .any(|&(x, y)| y == 0 || grid.is_occupied(x, y - 1))
}

/// Horizontal shift check, evaluated cell by cell against the edge column next to
/// each cell and the grid cell beside it. Rows are not bounds-checked here.
pub fn can_shift(grid: &Grid, cells: &PieceCells, dx: i8) -> bool {
    cells.iter().all(|&(x, y)| {
        let blocked_by_edge = match dx {
            -1 => x == 0,
            1 => x == GRID_WIDTH as i8 - 1,
            _ => true,
        };
        !blocked_by_edge && !grid.is_occupied(x + dx, y)
    })
}

/// Result of trying to place a new piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned,
    /// The spawn cells overlap the stack; the round is over.
    Blocked,
}

/// What a single gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece locked, `rows_cleared` rows were swept and a new piece was spawned.
    Locked {
        rows_cleared: u32,
        spawn: SpawnOutcome,
    },
    /// There was no active piece to move.
    NoPiece,
}

/// Grid + active piece + painter
#[derive(Debug, Clone)]
pub struct BlockEngine<P> {
    grid: Grid,
    active: Option<ActivePiece>,
    painter: P,
}

impl<P: Painter> BlockEngine<P> {
    pub fn new(painter: P) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            painter,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for arranging positions. Changes made here are not painted.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    pub fn is_valid(&self, cells: &PieceCells) -> bool {
        is_valid(&self.grid, cells)
    }

    /// Rotate in place to the next rotation state. No kicks are attempted.
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotation = active.rotation.next();
        let new_cells = candidate_cells(active.kind, rotation, active.anchor());
        if !self.is_valid(&new_cells) {
            return false;
        }

        self.active = Some(ActivePiece { rotation, ..active });
        self.repaint(&active.cells(), &new_cells, active.kind);
        true
    }

    /// Shift one column left (`dx = -1`) or right (`dx = 1`).
    pub fn try_move(&mut self, dx: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let old_cells = active.cells();
        if !can_shift(&self.grid, &old_cells, dx) {
            return false;
        }

        let moved = ActivePiece {
            x: active.x + dx,
            ..active
        };
        self.active = Some(moved);
        self.repaint(&old_cells, &moved.cells(), active.kind);
        true
    }

    /// Whether the active piece is resting on the floor or the stack.
    pub fn collision(&self) -> bool {
        match self.active {
            Some(active) => collision(&self.grid, &active.cells()),
            None => false,
        }
    }

    /// One gravity step: move down, or lock + sweep + spawn when resting.
    pub fn advance_gravity(&mut self, next_kind: impl FnOnce() -> PieceKind) -> GravityOutcome {
        let Some(active) = self.active else {
            return GravityOutcome::NoPiece;
        };

        if self.collision() {
            self.lock();
            let rows_cleared = self.sweep();
            let spawn = self.spawn(next_kind());
            return GravityOutcome::Locked {
                rows_cleared,
                spawn,
            };
        }

        let fallen = ActivePiece {
            y: active.y - 1,
            ..active
        };
        self.active = Some(fallen);
        self.repaint(&active.cells(), &fallen.cells(), active.kind);
        GravityOutcome::Fell
    }

    /// Write the active cells into the grid. The cells are already lit, so nothing
    /// is repainted. Returns false when there was no active piece.
    pub fn lock(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };

        for (x, y) in active.cells() {
            self.grid.set(x, y, Some(active.kind));
        }
        true
    }

    /// Remove full rows and drop the rows above them. Returns the number removed.
    pub fn sweep(&mut self) -> u32 {
        sweep::sweep(&mut self.grid, &mut self.painter).len() as u32
    }

    /// Place a fresh piece of `kind` at the spawn anchor in rotation 0.
    pub fn spawn(&mut self, kind: PieceKind) -> SpawnOutcome {
        let piece = ActivePiece::new(kind);
        let cells = piece.cells();
        if !self.is_valid(&cells) {
            self.active = None;
            return SpawnOutcome::Blocked;
        }

        self.active = Some(piece);
        for (x, y) in cells {
            self.painter.paint(x, y, kind);
        }
        SpawnOutcome::Spawned
    }

    /// Empty the grid and drop the active piece, turning off every lit cell.
    pub fn reset(&mut self) {
        if let Some(active) = self.active.take() {
            for (x, y) in active.cells() {
                self.painter.clear(x, y);
            }
        }

        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                if self.grid.is_occupied(x, y) {
                    self.painter.clear(x, y);
                }
            }
        }
        self.grid.clear_all();
    }

    /// Clear cells the piece left and paint cells it entered.
    fn repaint(&mut self, old: &PieceCells, new: &PieceCells, kind: PieceKind) {
        for &(x, y) in old.iter().filter(|c| !new.contains(c)) {
            self.painter.clear(x, y);
        }
        for &(x, y) in new.iter().filter(|c| !old.contains(c)) {
            self.painter.paint(x, y, kind);
        }
    }
}

impl<P: Painter + Default> Default for BlockEngine<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}
