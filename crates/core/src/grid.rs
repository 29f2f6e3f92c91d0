//! Grid module - the locked-cell occupancy table
//!
//! The grid is a 9x16 table mirroring the LED matrix. Each cell is either empty or
//! remembers the kind of piece that locked there, so shifted cells keep their color.
//! Uses a flat array for zero-allocation storage.
//! Coordinates: (x, y) where x ranges 0..8 (left to right), y ranges 0..15 (bottom to top).
//!
//! The active piece is never stored here; only [`crate::engine::BlockEngine::lock`]
//! writes piece cells into the grid.

use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

/// The playfield - 9 columns x 16 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::in_bounds(x, y) {
            Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Check if (x, y) lies on the grid
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); `Some(kind)` marks it occupied, `None` frees it.
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Kind locked at (x, y), if any
    pub fn kind_at(&self, x: i8, y: i8) -> Option<PieceKind> {
        self.get(x, y).flatten()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        (0..GRID_WIDTH as i8).all(|x| self.is_occupied(x, y))
    }

    /// Number of occupied cells in a row
    pub fn row_count(&self, y: i8) -> usize {
        (0..GRID_WIDTH as i8)
            .filter(|&x| self.is_occupied(x, y))
            .count()
    }

    /// Number of occupied cells on the whole grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire grid
    pub fn clear_all(&mut self) {
        self.cells = [None; GRID_SIZE];
    }

    /// Write a bottom-up occupancy bitmap: bit `x` of `out[y]` is set when (x, y) is occupied.
    pub fn write_rows(&self, out: &mut [u16; GRID_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            *row = (0..GRID_WIDTH as i8)
                .filter(|&x| self.is_occupied(x, y as i8))
                .fold(0u16, |bits, x| bits | (1 << x));
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
