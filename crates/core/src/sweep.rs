//! Line clearing.
//!
//! A single bottom-up pass: full rows are emptied and counted, every later
//! (higher) row drops by the number of full rows found below it. Each row is
//! visited once, so a row that already moved is never processed again.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::render::Painter;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Indices of removed rows, bottom to top, as they were before the sweep.
pub type ClearedRows = ArrayVec<i8, { GRID_HEIGHT as usize }>;

/// Clear full rows, compact the rows above, and return which rows were removed.
pub fn sweep<P: Painter>(grid: &mut Grid, painter: &mut P) -> ClearedRows {
    let mut cleared = ClearedRows::new();

    for y in 0..GRID_HEIGHT as i8 {
        if grid.is_row_full(y) {
            for x in 0..GRID_WIDTH as i8 {
                grid.set(x, y, None);
                painter.clear(x, y);
            }
            cleared.push(y);
            continue;
        }

        if cleared.is_empty() {
            continue;
        }

        let target = y - cleared.len() as i8;
        for x in 0..GRID_WIDTH as i8 {
            let Some(kind) = grid.kind_at(x, y) else {
                continue;
            };
            grid.set(x, target, Some(kind));
            grid.set(x, y, None);
            painter.clear(x, y);
            painter.paint(x, target, kind);
        }
    }

    cleared
}
