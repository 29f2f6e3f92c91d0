//! In-memory image of the LED strip.

use crate::core::Painter;
use crate::palette::{Rgb, GAME_OVER_COLOR};
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH, LED_COUNT};
use crate::wiring::WIRING;

/// One color per physical LED, in strip order.
pub type Pixels = [Rgb; LED_COUNT];

/// Strip image updated cell by cell by the engine.
///
/// `pixels` always holds the true piece colors. While the game-over indication is
/// on, [`LedFrame::output`] shows every lit LED in [`GAME_OVER_COLOR`] instead, so
/// turning the indication off restores the stack exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedFrame {
    pixels: Pixels,
    alert: bool,
}

impl LedFrame {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb::OFF; LED_COUNT],
            alert: false,
        }
    }

    fn physical(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some(WIRING[y as usize * GRID_WIDTH as usize + x as usize] as usize)
    }

    /// Color of logical cell (x, y) ignoring the game-over indication.
    pub fn cell(&self, x: i8, y: i8) -> Rgb {
        Self::physical(x, y)
            .map(|i| self.pixels[i])
            .unwrap_or(Rgb::OFF)
    }

    /// Raw pixel at physical index, ignoring the game-over indication.
    pub fn pixel(&self, index: usize) -> Rgb {
        self.pixels.get(index).copied().unwrap_or(Rgb::OFF)
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_lit()).count()
    }

    /// Compose the colors to push to the strip.
    pub fn output_into(&self, out: &mut Pixels) {
        for (dst, src) in out.iter_mut().zip(self.pixels.iter()) {
            *dst = if self.alert && src.is_lit() {
                GAME_OVER_COLOR
            } else {
                *src
            };
        }
    }

    pub fn output(&self) -> Pixels {
        let mut out = [Rgb::OFF; LED_COUNT];
        self.output_into(&mut out);
        out
    }
}

impl Default for LedFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter for LedFrame {
    fn paint(&mut self, x: i8, y: i8, kind: PieceKind) {
        if let Some(i) = Self::physical(x, y) {
            self.pixels[i] = Rgb::from(kind);
        }
    }

    fn clear(&mut self, x: i8, y: i8) {
        if let Some(i) = Self::physical(x, y) {
            self.pixels[i] = Rgb::OFF;
        }
    }

    fn game_over(&mut self, lit: bool) {
        self.alert = lit;
    }
}
