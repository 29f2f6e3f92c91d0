//! Piece colors.

use crate::types::PieceKind;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_lit(&self) -> bool {
        *self != Self::OFF
    }
}

/// Strip colors by color code: 0 is unlit, 1-7 follow [`PieceKind::ALL`].
pub const PALETTE: [Rgb; 8] = [
    Rgb::OFF,
    Rgb::new(0, 255, 255), // I
    Rgb::new(255, 255, 0), // O
    Rgb::new(160, 0, 255), // T
    Rgb::new(0, 255, 0),   // S
    Rgb::new(255, 0, 0),   // Z
    Rgb::new(0, 0, 255),   // J
    Rgb::new(255, 128, 0), // L
];

/// Color lit cells take while the game-over indication is on.
pub const GAME_OVER_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Palette index for a piece kind (never 0).
pub fn color_code(kind: PieceKind) -> u8 {
    kind.index() as u8 + 1
}

impl From<PieceKind> for Rgb {
    fn from(kind: PieceKind) -> Self {
        PALETTE[color_code(kind) as usize]
    }
}
