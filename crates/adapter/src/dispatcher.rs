//! Game task: the single writer of all playfield state.
//!
//! Player commands from any number of producers and the periodic gravity / flash
//! ticks all funnel into one tokio task that owns the [`Game`]. Commands are taken
//! off an mpsc queue in arrival order and applied one at a time; a tick is just
//! another step of the same loop. Every committed step is presented to the strip
//! and published on a watch channel as a complete frame, so readers never see a
//! half-applied mutation.

use std::time::Duration;

use anyhow::{anyhow, Result};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::core::{CommandOutcome, Game, GameSnapshot, TickOutcome};
use crate::led::{LedFrame, LedStrip, Pixels, Rgb};
use crate::types::{Command, RoundState, GAME_OVER_FLASH_MS, GRAVITY_MS, LED_COUNT};

/// Game task settings
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Piece RNG seed
    pub seed: u32,
    /// Commands that may wait in the queue before producers are held back
    pub max_pending_commands: usize,
    pub gravity: Duration,
    pub flash: Duration,
    /// Start the first round as soon as the task runs
    pub autostart: bool,
    /// Log rejected and ignored commands
    pub trace: bool,
    /// Write no log lines; set when stdout belongs to a terminal preview
    pub quiet: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_pending_commands: 16,
            gravity: Duration::from_millis(GRAVITY_MS as u64),
            flash: Duration::from_millis(GAME_OVER_FLASH_MS as u64),
            autostart: true,
            trace: false,
            quiet: false,
        }
    }
}

impl DispatcherConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let seed = env::var("LED_TETRIS_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let max_pending_commands = env::var("LED_TETRIS_MAX_PENDING")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_pending_commands);

        let trace = env::var("LED_TETRIS_TRACE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            max_pending_commands,
            trace,
            ..defaults
        }
    }

    /// Tick period for a round state; `None` while idle.
    fn period(&self, state: RoundState) -> Option<Duration> {
        match state {
            RoundState::Idle => None,
            RoundState::Running => Some(self.gravity),
            RoundState::GameOver => Some(self.flash),
        }
    }
}

/// Request handled by the game task.
#[derive(Debug)]
pub enum Request {
    Command(Command),
    /// Reply with the committed state once every earlier request has been applied.
    Snapshot(oneshot::Sender<GameSnapshot>),
}

/// Frame published after each committed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameUpdate {
    /// Increments with every published frame
    pub seq: u64,
    pub state: RoundState,
    /// Composed colors in physical strip order
    pub pixels: Pixels,
}

impl FrameUpdate {
    fn blank() -> Self {
        Self {
            seq: 0,
            state: RoundState::Idle,
            pixels: [Rgb::OFF; LED_COUNT],
        }
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_lit()).count()
    }
}

/// Cloneable producer side of the command queue.
#[derive(Debug, Clone)]
pub struct GameHandle {
    tx: mpsc::Sender<Request>,
}

impl GameHandle {
    /// Queue a command, waiting for room if the queue is full.
    pub async fn send(&self, command: Command) -> Result<()> {
        self.tx
            .send(Request::Command(command))
            .await
            .map_err(|_| anyhow!("game task stopped"))
    }

    /// Queue a command without waiting; returns false if it was dropped.
    pub fn try_send(&self, command: Command) -> bool {
        self.tx.try_send(Request::Command(command)).is_ok()
    }

    /// Committed state after every request queued before this one.
    pub async fn snapshot(&self) -> Result<GameSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Request::Snapshot(reply_tx))
            .await
            .map_err(|_| anyhow!("game task stopped"))?;
        reply_rx.await.map_err(|_| anyhow!("game task dropped snapshot request"))
    }
}

/// Running game task.
pub struct Dispatcher {
    pub handle: GameHandle,
    pub frames: watch::Receiver<FrameUpdate>,
    pub task: JoinHandle<()>,
}

/// Spawn the game task on the current tokio runtime.
///
/// The task stops once every [`GameHandle`] has been dropped.
pub fn spawn_game<S>(config: DispatcherConfig, strip: S) -> Dispatcher
where
    S: LedStrip + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Request>(config.max_pending_commands.max(1));
    let (frame_tx, frame_rx) = watch::channel(FrameUpdate::blank());

    let task = tokio::spawn(async move {
        let quiet = config.quiet;
        run_game(config, rx, frame_tx, strip).await;
        if !quiet {
            println!("[Dispatcher] Game task stopped");
        }
    });

    Dispatcher {
        handle: GameHandle { tx },
        frames: frame_rx,
        task,
    }
}

struct Presenter<S> {
    strip: S,
    quiet: bool,
    frame_tx: watch::Sender<FrameUpdate>,
    scratch: Pixels,
    seq: u64,
}

impl<S: LedStrip> Presenter<S> {
    /// Push the committed frame to the strip and publish it.
    fn present(&mut self, game: &Game<LedFrame>) {
        game.painter().output_into(&mut self.scratch);
        if let Err(e) = self.strip.show(&self.scratch) {
            if !self.quiet {
                eprintln!("[Dispatcher] Strip error: {}", e);
            }
        }

        self.seq += 1;
        let update = FrameUpdate {
            seq: self.seq,
            state: game.state(),
            pixels: self.scratch,
        };
        self.frame_tx.send_replace(update);
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

async fn run_game<S: LedStrip>(
    config: DispatcherConfig,
    mut rx: mpsc::Receiver<Request>,
    frame_tx: watch::Sender<FrameUpdate>,
    strip: S,
) {
    let mut game = Game::new(config.seed, LedFrame::new());
    let mut presenter = Presenter {
        strip,
        quiet: config.quiet,
        frame_tx,
        scratch: [Rgb::OFF; LED_COUNT],
        seq: 0,
    };

    if config.autostart && game.start() && !config.quiet {
        println!("[Dispatcher] Round {} started", game.round());
    }
    presenter.present(&game);

    let mut deadline = config.period(game.state()).map(|p| Instant::now() + p);

    loop {
        tokio::select! {
            request = rx.recv() => {
                let Some(request) = request else {
                    break;
                };

                match request {
                    Request::Command(command) => {
                        let before = (game.state(), game.round());
                        let outcome = game.apply(command);
                        match outcome {
                            CommandOutcome::Applied => presenter.present(&game),
                            CommandOutcome::Rejected | CommandOutcome::Ignored => {
                                if config.trace && !config.quiet {
                                    println!(
                                        "[Dispatcher] {} {:?} in state {}",
                                        command.as_str(),
                                        outcome,
                                        game.state().as_str()
                                    );
                                }
                            }
                        }

                        // A restart begins a fresh gravity period.
                        if (game.state(), game.round()) != before {
                            if !config.quiet {
                                println!("[Dispatcher] Round {} started", game.round());
                            }
                            deadline = config.period(game.state()).map(|p| Instant::now() + p);
                        }
                    }
                    Request::Snapshot(reply) => {
                        let _ = reply.send(game.snapshot());
                    }
                }
            }

            _ = wait_until(deadline) => {
                let outcome = game.tick();
                if outcome != TickOutcome::Idle {
                    presenter.present(&game);
                }

                if outcome == TickOutcome::GameOver && !config.quiet {
                    println!(
                        "[Dispatcher] Round {} over after {} rows",
                        game.round(),
                        game.rows_cleared()
                    );
                }

                let now = Instant::now();
                deadline = config.period(game.state()).map(|p| {
                    // Keep a steady cadence unless the loop fell behind.
                    match deadline {
                        Some(prev) if outcome != TickOutcome::GameOver && prev + p > now => prev + p,
                        _ => now + p,
                    }
                });
            }
        }
    }
}
