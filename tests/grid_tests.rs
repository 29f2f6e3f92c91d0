//! Grid and row-sweep tests

use led_tetris::core::{sweep, Grid, PaintOp, RecordingPainter};
use led_tetris::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

fn fill_row(grid: &mut Grid, y: i8) {
    for x in 0..GRID_WIDTH as i8 {
        assert!(grid.set(x, y, Some(PieceKind::I)));
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(None), "cell ({}, {}) should be empty", x, y);
        }
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, GRID_HEIGHT as i8), None);
    assert!(!grid.set(GRID_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!grid.is_occupied(-1, 3));
}

#[test]
fn test_sweep_two_separated_full_rows() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 3);
    fill_row(&mut grid, 5);
    grid.set(0, 4, Some(PieceKind::T));
    grid.set(2, 4, Some(PieceKind::S));
    grid.set(1, 6, Some(PieceKind::Z));
    grid.set(7, 9, Some(PieceKind::L));

    let mut painter = RecordingPainter::new();
    let cleared = sweep(&mut grid, &mut painter);

    assert_eq!(cleared.as_slice(), &[3, 5]);

    // Row 4 drops by one.
    assert_eq!(grid.kind_at(0, 3), Some(PieceKind::T));
    assert_eq!(grid.kind_at(2, 3), Some(PieceKind::S));
    assert_eq!(grid.row_count(3), 2);
    // Rows above 5 drop by two.
    assert_eq!(grid.kind_at(1, 4), Some(PieceKind::Z));
    assert_eq!(grid.kind_at(7, 7), Some(PieceKind::L));
    assert_eq!(grid.row_count(4), 1);
    assert_eq!(grid.row_count(5), 0);
    assert_eq!(grid.row_count(6), 0);
    assert_eq!(grid.row_count(9), 0);

    assert_eq!(grid.occupied_count(), 4);
    for y in 0..GRID_HEIGHT as i8 {
        assert!(!grid.is_row_full(y));
    }

    // Each moved cell is cleared at its source and painted at its target.
    assert!(painter.ops().contains(&PaintOp::Clear { x: 7, y: 9 }));
    assert!(painter.ops().contains(&PaintOp::Paint {
        x: 7,
        y: 7,
        kind: PieceKind::L
    }));
}

#[test]
fn test_sweep_without_full_rows_changes_nothing() {
    let mut grid = Grid::new();
    grid.set(4, 0, Some(PieceKind::O));
    let before = grid.clone();

    let mut painter = RecordingPainter::new();
    let cleared = sweep(&mut grid, &mut painter);

    assert!(cleared.is_empty());
    assert_eq!(grid, before);
    assert!(painter.ops().is_empty());
}

#[test]
fn test_sweep_whole_grid() {
    let mut grid = Grid::new();
    for y in 0..GRID_HEIGHT as i8 {
        fill_row(&mut grid, y);
    }

    let cleared = sweep(&mut grid, &mut RecordingPainter::new());
    assert_eq!(cleared.len(), GRID_HEIGHT as usize);
    assert_eq!(grid.occupied_count(), 0);
}
