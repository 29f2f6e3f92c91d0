//! Active-piece tests: spawn, rotate, move and gravity through the public API

use led_tetris::core::{
    candidate_cells, offsets, BlockEngine, CommandOutcome, Game, GravityOutcome, NullPainter,
    PaintOp, RecordingPainter, SpawnOutcome,
};
use led_tetris::types::{Command, PieceKind, Rotation, RoundState, SPAWN_ANCHOR};

fn engine_with(kind: PieceKind) -> BlockEngine<RecordingPainter> {
    let mut engine = BlockEngine::new(RecordingPainter::new());
    assert_eq!(engine.spawn(kind), SpawnOutcome::Spawned);
    engine
}

#[test]
fn test_i_piece_spawn_and_rotate() {
    let mut engine = engine_with(PieceKind::I);

    let active = engine.active().unwrap();
    assert_eq!(active.anchor(), SPAWN_ANCHOR);
    assert_eq!(active.rotation, Rotation::North);
    assert_eq!(active.cells(), [(2, 14), (3, 14), (4, 14), (5, 14)]);

    assert!(engine.try_rotate());
    let active = engine.active().unwrap();
    assert_eq!(active.rotation, Rotation::East);
    assert_eq!(active.cells(), [(4, 15), (4, 14), (4, 13), (4, 12)]);
}

#[test]
fn test_spawned_cells_are_painted_once() {
    let engine = engine_with(PieceKind::T);
    let painted: Vec<_> = engine
        .painter()
        .ops()
        .iter()
        .filter(|op| matches!(op, PaintOp::Paint { .. }))
        .collect();
    assert_eq!(painted.len(), 4);
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        let mut engine = BlockEngine::new(NullPainter);
        assert_eq!(engine.spawn(kind), SpawnOutcome::Spawned);

        // Drop clear of the top edge so every rotation state fits.
        for _ in 0..4 {
            engine.advance_gravity(|| PieceKind::O);
        }

        let start = engine.active().unwrap();
        for _ in 0..4 {
            assert!(engine.try_rotate(), "{:?} should rotate freely", kind);
        }
        let end = engine.active().unwrap();
        assert_eq!(end.rotation, start.rotation);
        assert_eq!(end.cells(), start.cells());
    }
}

#[test]
fn test_north_shapes_fit_at_spawn() {
    for kind in PieceKind::ALL {
        let cells = candidate_cells(kind, Rotation::North, SPAWN_ANCHOR);
        assert_eq!(cells.len(), 4);
        for (dx, dy) in offsets(kind, Rotation::North) {
            assert!((0..=1).contains(&dy), "{:?} north offset ({}, {})", kind, dx, dy);
        }
    }
}

#[test]
fn test_move_stops_at_walls() {
    let mut engine = engine_with(PieceKind::I);

    assert!(engine.try_move(-1));
    assert!(engine.try_move(-1));
    assert_eq!(engine.active().unwrap().cells()[0], (0, 14));
    assert!(!engine.try_move(-1));

    for _ in 0..5 {
        assert!(engine.try_move(1));
    }
    assert_eq!(engine.active().unwrap().cells()[3], (8, 14));
    assert!(!engine.try_move(1));
}

#[test]
fn test_move_blocked_by_stack() {
    let mut engine = engine_with(PieceKind::I);
    engine.grid_mut().set(6, 14, Some(PieceKind::O));

    let before = engine.active();
    assert!(!engine.try_move(1));
    assert_eq!(engine.active(), before);
    assert!(engine.try_move(-1));
}

#[test]
fn test_gravity_falls_then_locks() {
    let mut engine = engine_with(PieceKind::O);

    // O north occupies rows 14 and 15; 14 falls reach the floor.
    for _ in 0..14 {
        assert_eq!(engine.advance_gravity(|| PieceKind::T), GravityOutcome::Fell);
    }
    assert!(engine.collision());

    let outcome = engine.advance_gravity(|| PieceKind::T);
    assert_eq!(
        outcome,
        GravityOutcome::Locked {
            rows_cleared: 0,
            spawn: SpawnOutcome::Spawned
        }
    );
    assert_eq!(engine.grid().occupied_count(), 4);
    assert_eq!(engine.grid().kind_at(4, 0), Some(PieceKind::O));
    assert_eq!(engine.active().unwrap().kind, PieceKind::T);
}

#[test]
fn test_rotate_blocked_leaves_piece() {
    let mut engine = engine_with(PieceKind::I);
    engine.grid_mut().set(4, 13, Some(PieceKind::O));

    let before = engine.active();
    assert!(!engine.try_rotate());
    assert_eq!(engine.active(), before);
}

#[test]
fn test_rotate_out_of_bounds_leaves_piece() {
    let mut engine = engine_with(PieceKind::I);
    assert!(engine.try_rotate());
    assert!(engine.try_rotate());

    let before = engine.active().unwrap();
    assert_eq!(before.rotation, Rotation::South);

    // West reaches y = 16 from the spawn row.
    let ops_before = engine.painter().ops().len();
    assert!(!engine.try_rotate());
    let after = engine.active().unwrap();
    assert_eq!(after.rotation, Rotation::South);
    assert_eq!(after.cells(), before.cells());
    assert_eq!(engine.painter().ops().len(), ops_before);
}

#[test]
fn test_game_rejects_blocked_moves() {
    let mut game = Game::new(3, NullPainter);
    assert_eq!(game.apply(Command::MoveLeft), CommandOutcome::Ignored);

    game.start();
    assert_eq!(game.state(), RoundState::Running);

    let mut rejected = false;
    for _ in 0..9 {
        if game.apply(Command::MoveLeft) == CommandOutcome::Rejected {
            rejected = true;
            break;
        }
    }
    assert!(rejected);
    let cells = game.active().unwrap().cells();
    assert!(cells.iter().any(|&(x, _)| x == 0));
}
