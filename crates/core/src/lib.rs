//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the playfield model and all rules. It has **no dependencies**
//! on timers, threads, networking or LED hardware:
//!
//! - **Deterministic**: the same seed yields the same piece sequence
//! - **Single owner**: one [`Game`] value holds every piece of mutable state
//! - **Render-agnostic**: committed changes are reported through [`Painter`]
//!
//! # Module Structure
//!
//! - [`grid`]: 9x16 table of locked cells
//! - [`pieces`]: tetromino offsets per kind and rotation
//! - [`engine`]: the active piece; move, rotate, gravity, lock and spawn
//! - [`sweep`]: full-row removal and compaction
//! - [`game`]: Idle / Running / GameOver lifecycle
//! - [`rng`]: seeded piece selection
//! - [`render`]: the [`Painter`] seam used by the LED renderer
//! - [`snapshot`]: copyable view of committed state
//!
//! # Rules
//!
//! - Pieces spawn at (4, 14) in rotation 0 and fall one row per gravity tick
//! - Rotation happens in place; a blocked rotation simply does nothing
//! - A piece locks on the first tick it rests on the floor or the stack
//! - The round ends when a fresh piece does not fit at the spawn anchor
//!
//! # Example
//!
//! ```
//! use led_tetris_core::{Game, NullPainter};
//! use led_tetris_types::{Command, RoundState};
//!
//! let mut game = Game::new(12345, NullPainter);
//! game.start();
//!
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Rotate);
//! game.tick();
//!
//! assert_eq!(game.state(), RoundState::Running);
//! assert!(game.active().is_some());
//! ```

pub mod engine;
pub mod game;
pub mod grid;
pub mod pieces;
pub mod render;
pub mod rng;
pub mod snapshot;
pub mod sweep;

pub use led_tetris_types as types;

// Re-export commonly used types for convenience
pub use engine::{
    candidate_cells, ActivePiece, BlockEngine, GravityOutcome, PieceCells, SpawnOutcome,
};
pub use game::{CommandOutcome, Game, TickOutcome};
pub use grid::Grid;
pub use pieces::offsets;
pub use render::{NullPainter, PaintOp, Painter, RecordingPainter};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use sweep::{sweep, ClearedRows};
