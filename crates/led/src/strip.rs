//! Output seam for a physical (or simulated) LED strip.

use anyhow::Result;

use crate::frame::Pixels;
use crate::palette::Rgb;
use crate::types::LED_COUNT;

/// Something that can present a full strip frame.
///
/// `show` is the hardware's frame-present call: it is invoked once per committed
/// mutation with the composed colors in physical strip order.
pub trait LedStrip {
    fn show(&mut self, pixels: &Pixels) -> Result<()>;
}

/// Strip that keeps the last presented frame in memory.
#[derive(Debug, Clone)]
pub struct MemoryStrip {
    last: Pixels,
    frames: u64,
}

impl MemoryStrip {
    pub fn new() -> Self {
        Self {
            last: [Rgb::OFF; LED_COUNT],
            frames: 0,
        }
    }

    pub fn last(&self) -> &Pixels {
        &self.last
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for MemoryStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl LedStrip for MemoryStrip {
    fn show(&mut self, pixels: &Pixels) -> Result<()> {
        self.last = *pixels;
        self.frames += 1;
        Ok(())
    }
}
