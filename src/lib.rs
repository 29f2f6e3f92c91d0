//! Tetris on a 9x16 LED matrix (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `led_tetris::{types,core,led,adapter,term}`.

pub use led_tetris_adapter as adapter;
pub use led_tetris_core as core;
pub use led_tetris_led as led;
pub use led_tetris_term as term;
pub use led_tetris_types as types;
