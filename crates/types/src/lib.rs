//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the LED renderer and the command transport alike.
//!
//! # Playfield
//!
//! The playfield matches the physical LED matrix:
//!
//! - **Width**: 9 columns (indexed 0-8, left to right)
//! - **Height**: 16 rows (indexed 0-15, bottom to top)
//! - **Spawn anchor**: (4, 14)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 500 | Interval between gravity ticks while a round runs |
//! | `GAME_OVER_FLASH_MS` | 150 | Toggle interval of the game-over indication |
//!
//! # Examples
//!
//! ```
//! use led_tetris_types::{Command, PieceKind, Rotation, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(2), Some(PieceKind::T));
//! assert_eq!(Rotation::West.next(), Rotation::North);
//! assert_eq!(Command::parse("move-left"), Some(Command::MoveLeft));
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (9, 16));
//! ```

/// Grid width in cells (9 columns)
pub const GRID_WIDTH: u8 = 9;

/// Grid height in cells (16 rows)
pub const GRID_HEIGHT: u8 = 16;

/// Number of LEDs on the physical strip (one per logical cell)
pub const LED_COUNT: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

/// Anchor every freshly spawned piece starts from
pub const SPAWN_ANCHOR: Coord = (4, 14);

/// Gravity interval in milliseconds
pub const GRAVITY_MS: u32 = 500;

/// Game-over indication toggle interval in milliseconds
pub const GAME_OVER_FLASH_MS: u32 = 150;

/// Absolute cell position `(x, y)` on the grid, `y = 0` being the bottom row.
pub type Coord = (i8, i8);

/// Contents of one grid cell: `None` when empty, otherwise the kind that locked there.
pub type Cell = Option<PieceKind>;


/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation state of a piece, numbered 0-3
///
/// The cycle goes: North (0) → East (1) → South (2) → West (3) → North.
/// There is no counter-clockwise transition; the board only rotates one way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Next rotation state, `(rotation + 1) mod 4`
    ///
    /// # Examples
    ///
    /// ```
    /// use led_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.next(), Rotation::East);
    /// assert_eq!(Rotation::West.next(), Rotation::North);
    /// ```
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for `index mod 4`
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Player commands carried by the external transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Rotate the active piece in place
    Rotate,
    /// End any running round and start a fresh one
    Restart,
}

impl Command {
    /// Parse a transport token.
    ///
    /// Matching is a case-sensitive substring search for `left`, `right`,
    /// `rotate` and `restart`, tried in that order. Anything else is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use led_tetris_types::Command;
    ///
    /// assert_eq!(Command::parse("move-right"), Some(Command::MoveRight));
    /// assert_eq!(Command::parse("restart"), Some(Command::Restart));
    /// assert_eq!(Command::parse("Rotate"), None);
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        const TOKENS: [(&str, Command); 4] = [
            ("left", Command::MoveLeft),
            ("right", Command::MoveRight),
            ("rotate", Command::Rotate),
            ("restart", Command::Restart),
        ];

        TOKENS
            .iter()
            .find(|(needle, _)| token.contains(needle))
            .map(|&(_, command)| command)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "move-left",
            Command::MoveRight => "move-right",
            Command::Rotate => "rotate",
            Command::Restart => "restart",
        }
    }
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// No round started yet, or between a restart and the next spawn
    #[default]
    Idle,
    /// A piece is falling and commands are applied
    Running,
    /// A spawn overlapped the stack (or the round was ended); waiting for restart
    GameOver,
}

impl RoundState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundState::Idle => "idle",
            RoundState::Running => "running",
            RoundState::GameOver => "game_over",
        }
    }
}
