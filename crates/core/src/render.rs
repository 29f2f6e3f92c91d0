//! Render seam between the engine and whatever displays the playfield.
//!
//! The engine calls [`Painter::paint`] / [`Painter::clear`] once per logical cell
//! change, right after the mutation that caused it is committed. Implementations
//! must not defer or batch these calls beyond their own frame-present step.

use crate::types::PieceKind;

/// Receiver of per-cell render updates.
pub trait Painter {
    /// Light cell (x, y) in the color of `kind`.
    fn paint(&mut self, x: i8, y: i8, kind: PieceKind);

    /// Turn cell (x, y) off.
    fn clear(&mut self, x: i8, y: i8);

    /// Show or hide the game-over indication. Called on every flash period while
    /// a round is over; the next round repaints from a cleared grid.
    fn game_over(&mut self, _lit: bool) {}
}

/// Painter that discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPainter;

impl Painter for NullPainter {
    fn paint(&mut self, _x: i8, _y: i8, _kind: PieceKind) {}

    fn clear(&mut self, _x: i8, _y: i8) {}
}

/// A single recorded render update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    Paint { x: i8, y: i8, kind: PieceKind },
    Clear { x: i8, y: i8 },
    GameOver { lit: bool },
}

/// Painter that records every update in order; used by tests and benches.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Take the recorded updates, leaving the log empty.
    pub fn drain(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Painter for RecordingPainter {
    fn paint(&mut self, x: i8, y: i8, kind: PieceKind) {
        self.ops.push(PaintOp::Paint { x, y, kind });
    }

    fn clear(&mut self, x: i8, y: i8) {
        self.ops.push(PaintOp::Clear { x, y });
    }

    fn game_over(&mut self, lit: bool) {
        self.ops.push(PaintOp::GameOver { lit });
    }
}
