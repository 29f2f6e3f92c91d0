//! LED Tetris runner (default binary).
//!
//! Runs the game task and the TCP command transport on a tokio runtime, shows the
//! strip as a terminal preview and feeds keyboard input into the same command
//! queue network clients use. Stdout belongs to the preview, so both tasks run
//! quiet; a transport failure is reported once the terminal is restored.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use led_tetris::adapter::{run_server, spawn_game, DispatcherConfig, GameHandle, ServerConfig};
use led_tetris::term::{map_key, should_quit, TerminalStrip};

const INPUT_POLL: Duration = Duration::from_millis(50);
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

fn main() -> Result<()> {
    let rt = Runtime::new()?;

    let mut strip = TerminalStrip::new();
    strip.enter()?;

    let result = run(&rt, strip);

    // Stop every task before handing the terminal back.
    rt.shutdown_timeout(SHUTDOWN_GRACE);
    let _ = TerminalStrip::restore();

    let transport_error = result?;
    if let Some(e) = transport_error {
        eprintln!("[Transport] Server stopped: {}", e);
    }
    Ok(())
}

/// Play until the quit key. Returns the transport's error if it stopped early.
fn run(rt: &Runtime, strip: TerminalStrip) -> Result<Option<anyhow::Error>> {
    let dispatcher = {
        let _guard = rt.enter();
        let config = DispatcherConfig {
            quiet: true,
            ..DispatcherConfig::from_env()
        };
        spawn_game(config, strip)
    };

    let server = if ServerConfig::is_disabled() {
        None
    } else {
        let config = ServerConfig {
            quiet: true,
            ..ServerConfig::from_env()
        };
        let game = dispatcher.handle.clone();
        Some(rt.spawn(run_server(config, game, None)))
    };

    keyboard_loop(&dispatcher.handle)?;
    dispatcher.task.abort();

    Ok(server.and_then(|server| finished_error(rt, server)))
}

/// Error of a server task that already returned; a running server yields `None`.
fn finished_error(rt: &Runtime, server: JoinHandle<Result<()>>) -> Option<anyhow::Error> {
    if !server.is_finished() {
        server.abort();
        return None;
    }
    match rt.block_on(server) {
        Ok(Err(e)) => Some(e),
        _ => None,
    }
}

fn keyboard_loop(game: &GameHandle) -> Result<()> {
    loop {
        if !event::poll(INPUT_POLL)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if should_quit(key) {
            return Ok(());
        }

        if let Some(command) = map_key(key) {
            // A full queue drops the key press rather than stalling input.
            let _ = game.try_send(command);
        }
    }
}
