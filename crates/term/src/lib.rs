//! Terminal preview of the LED strip.
//!
//! Lets the game run without hardware: [`TerminalStrip`] implements the same
//! [`LedStrip`](crate::led::LedStrip) seam a real strip driver would, reading each
//! physical LED back through the serpentine wiring. [`input`] maps keys to the
//! same commands the text transport accepts.

pub mod input;
pub mod renderer;

pub use led_tetris_led as led;
pub use led_tetris_types as types;

pub use input::{map_key, should_quit};
pub use renderer::{encode_diff_into, encode_full_into, screen_position, TerminalStrip};
