//! TerminalStrip: shows the physical LED frame as a 9x16 block preview.
//!
//! Each LED is read back through the serpentine wiring to its logical cell and
//! drawn two characters wide, top row first. Only LEDs that changed since the
//! previous frame are redrawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::led::{physical_to_logical, LedStrip, Pixels, Rgb};
use crate::types::GRID_HEIGHT;

/// Characters used for one LED
const LIT: &str = "██";
const UNLIT: &str = "··";

/// Dim color for unlit LEDs
const UNLIT_FG: Rgb = Rgb::new(60, 60, 60);

pub struct TerminalStrip {
    stdout: io::Stdout,
    last: Option<Pixels>,
    buf: Vec<u8>,
}

impl TerminalStrip {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Leave the alternate screen and raw mode.
    ///
    /// Associated so it can run after the strip itself was handed to the game task.
    pub fn restore() -> Result<()> {
        let mut buf: Vec<u8> = Vec::new();
        buf.queue(ResetColor)?;
        buf.queue(SetAttribute(Attribute::Reset))?;
        buf.queue(terminal::EnableLineWrap)?;
        buf.queue(cursor::Show)?;
        buf.queue(terminal::LeaveAlternateScreen)?;

        let mut stdout = io::stdout();
        stdout.write_all(&buf)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl LedStrip for TerminalStrip {
    fn show(&mut self, pixels: &Pixels) -> Result<()> {
        self.buf.clear();
        match self.last.as_ref() {
            Some(prev) => encode_diff_into(prev, pixels, &mut self.buf)?,
            None => encode_full_into(pixels, &mut self.buf)?,
        }
        self.flush_buf()?;
        self.last = Some(*pixels);
        Ok(())
    }
}

/// Encode a full redraw of every LED into `out`.
pub fn encode_full_into(pixels: &Pixels, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for (index, &color) in pixels.iter().enumerate() {
        encode_led_into(index, color, out)?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the LEDs that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &Pixels, next: &Pixels, out: &mut Vec<u8>) -> Result<()> {
    for (index, (a, b)) in prev.iter().zip(next.iter()).enumerate() {
        if a != b {
            encode_led_into(index, *b, out)?;
        }
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Terminal (column, row) where the LED at physical `index` is drawn.
pub fn screen_position(index: usize) -> Option<(u16, u16)> {
    let (x, y) = physical_to_logical(index)?;
    Some((x as u16 * 2, (GRID_HEIGHT - 1 - y) as u16))
}

fn encode_led_into(index: usize, color: Rgb, out: &mut Vec<u8>) -> Result<()> {
    let Some((col, row)) = screen_position(index) else {
        return Ok(());
    };

    out.queue(cursor::MoveTo(col, row))?;
    if color.is_lit() {
        out.queue(SetForegroundColor(rgb_to_color(color)))?;
        out.queue(Print(LIT))?;
    } else {
        out.queue(SetForegroundColor(rgb_to_color(UNLIT_FG)))?;
        out.queue(Print(UNLIT))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
