//! Serpentine wiring of the 9x16 matrix.
//!
//! The strip runs column by column. Column `x` starts at physical index `x * 16`.
//! Even columns run upward (index grows with `y`), odd columns run downward.

use crate::types::{GRID_HEIGHT, GRID_WIDTH, LED_COUNT};

const ROWS: usize = GRID_HEIGHT as usize;
const COLS: usize = GRID_WIDTH as usize;

/// Physical index for every logical cell, indexed by `y * 9 + x`.
pub static WIRING: [u16; LED_COUNT] = serpentine_column_major_mapping();

/// Physical strip index of logical cell (x, y).
///
/// # Examples
///
/// ```
/// use led_tetris_led::logical_to_physical;
///
/// assert_eq!(logical_to_physical(0, 0), 0);
/// assert_eq!(logical_to_physical(0, 15), 15);
/// assert_eq!(logical_to_physical(1, 15), 16);
/// assert_eq!(logical_to_physical(1, 0), 31);
/// ```
pub const fn logical_to_physical(x: u8, y: u8) -> usize {
    let (x, y) = (x as usize, y as usize);
    let column_start = x * ROWS;
    if x % 2 == 0 {
        column_start + y
    } else {
        column_start + (ROWS - 1 - y)
    }
}

/// Logical cell lit by physical strip index `index`, if the index is on the strip.
pub const fn physical_to_logical(index: usize) -> Option<(u8, u8)> {
    if index >= LED_COUNT {
        return None;
    }
    let x = index / ROWS;
    let offset = index % ROWS;
    let y = if x % 2 == 0 { offset } else { ROWS - 1 - offset };
    Some((x as u8, y as u8))
}

/// Build the wiring table.
const fn serpentine_column_major_mapping() -> [u16; LED_COUNT] {
    let mut mapping = [0u16; LED_COUNT];
    let mut y = 0;
    while y < ROWS {
        let mut x = 0;
        while x < COLS {
            mapping[y * COLS + x] = logical_to_physical(x as u8, y as u8) as u16;
            x += 1;
        }
        y += 1;
    }
    mapping
}
