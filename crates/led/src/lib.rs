//! LED renderer module.
//!
//! Turns logical grid updates into colors on a physical, serpentine-wired strip.
//!
//! - [`wiring`]: logical (x, y) ↔ physical strip index
//! - [`palette`]: one color per piece kind, 0 meaning unlit
//! - [`frame`]: [`LedFrame`], the in-memory strip image; implements the core `Painter`
//! - [`strip`]: [`LedStrip`], the seam to whatever pushes a frame to hardware

pub mod frame;
pub mod palette;
pub mod strip;
pub mod wiring;

pub use led_tetris_core as core;
pub use led_tetris_types as types;

pub use frame::{LedFrame, Pixels};
pub use palette::{color_code, Rgb, GAME_OVER_COLOR, PALETTE};
pub use strip::{LedStrip, MemoryStrip};
pub use wiring::{logical_to_physical, physical_to_logical, WIRING};
