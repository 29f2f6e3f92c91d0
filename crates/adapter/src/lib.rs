//! Adapter module - command dispatch and transport
//!
//! This crate connects the pure game core to the outside world:
//!
//! - [`dispatcher`]: one tokio task owns the [`Game`](crate::core::Game) and
//!   applies queued commands and gravity ticks strictly one after another
//! - [`server`]: a line-based TCP transport that turns text tokens into commands
//!
//! # Command Protocol
//!
//! Each line is one token. Matching is a case-sensitive substring search:
//!
//! | Token contains | Command |
//! |----------------|---------|
//! | `left` | move the piece one column left |
//! | `right` | move the piece one column right |
//! | `rotate` | rotate the piece in place |
//! | `restart` | end the round and start a new one |
//!
//! Anything else is ignored. Commands other than `restart` are discarded while
//! no round is running.
//!
//! # Environment Variables
//!
//! - `LED_TETRIS_HOST`: Bind address (default: "127.0.0.1")
//! - `LED_TETRIS_PORT`: Port number (default: 7878)
//! - `LED_TETRIS_DISABLED`: Set to "1" or "true" to run without the transport
//! - `LED_TETRIS_MAX_PENDING`: Command queue depth (default: 16)
//! - `LED_TETRIS_SEED`: Piece RNG seed (default: 1)
//! - `LED_TETRIS_TRACE`: Set to "1" or "true" to log rejected and ignored commands
//!
//! # Testing
//!
//! ```bash
//! nc 127.0.0.1 7878
//! left
//! rotate
//! ```

pub mod dispatcher;
pub mod server;

pub use led_tetris_core as core;
pub use led_tetris_led as led;
pub use led_tetris_types as types;

pub use dispatcher::{spawn_game, Dispatcher, DispatcherConfig, FrameUpdate, GameHandle, Request};
pub use server::{run_server, ServerConfig};
