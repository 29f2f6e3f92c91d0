//! Game module - round lifecycle on top of the block engine
//!
//! `Game` is the single owner of all mutable playfield state: grid, active piece,
//! round state and piece RNG. It has no notion of time; the caller invokes
//! [`Game::tick`] once per gravity (or flash) period and [`Game::apply`] for each
//! player command, and is responsible for never calling both concurrently.

use crate::engine::{ActivePiece, BlockEngine, GravityOutcome, SpawnOutcome};
use crate::grid::Grid;
use crate::render::Painter;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, RoundState};

/// Result of applying one player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command changed the game.
    Applied,
    /// The move or rotation was invalid; nothing changed.
    Rejected,
    /// No round is running; the command was discarded.
    Ignored,
}

/// What one scheduled tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Fell,
    Locked { rows_cleared: u32 },
    /// The freshly spawned piece did not fit; the round just ended.
    GameOver,
    /// The game-over indication toggled.
    Flash { lit: bool },
    /// Nothing to do before the first round starts.
    Idle,
}

#[derive(Debug, Clone)]
pub struct Game<P> {
    engine: BlockEngine<P>,
    rng: SimpleRng,
    state: RoundState,
    round: u32,
    rows_cleared: u32,
    flash_lit: bool,
}

impl<P: Painter> Game<P> {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u32, painter: P) -> Self {
        Self {
            engine: BlockEngine::new(painter),
            rng: SimpleRng::new(seed),
            state: RoundState::Idle,
            round: 0,
            rows_cleared: 0,
            flash_lit: false,
        }
    }

    /// Idle → Running: spawn the first piece of a round.
    ///
    /// Returns false if a round is already running or over.
    pub fn start(&mut self) -> bool {
        if self.state != RoundState::Idle {
            return false;
        }

        self.round = self.round.wrapping_add(1);
        self.rows_cleared = 0;
        self.flash_lit = false;
        self.state = RoundState::Running;

        let kind = self.rng.next_piece();
        if self.engine.spawn(kind) == SpawnOutcome::Blocked {
            self.state = RoundState::GameOver;
        }
        true
    }

    /// Force the running round into GameOver.
    pub fn end_round(&mut self) -> bool {
        if self.state != RoundState::Running {
            return false;
        }
        self.state = RoundState::GameOver;
        self.flash_lit = false;
        true
    }

    /// End whatever is going on, clear the grid and start a fresh round.
    pub fn restart(&mut self) {
        self.end_round();
        self.engine.painter_mut().game_over(false);
        self.engine.reset();
        self.state = RoundState::Idle;
        self.start();
    }

    /// Apply one player command.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let applied = match command {
            Command::Restart => {
                self.restart();
                return CommandOutcome::Applied;
            }
            _ if self.state != RoundState::Running => return CommandOutcome::Ignored,
            Command::MoveLeft => self.engine.try_move(-1),
            Command::MoveRight => self.engine.try_move(1),
            Command::Rotate => self.engine.try_rotate(),
        };

        if applied {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Rejected
        }
    }

    /// Advance one scheduled step: gravity while running, the flash while over.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            RoundState::Idle => TickOutcome::Idle,
            RoundState::Running => {
                let rng = &mut self.rng;
                match self.engine.advance_gravity(|| rng.next_piece()) {
                    GravityOutcome::Fell => TickOutcome::Fell,
                    GravityOutcome::Locked {
                        rows_cleared,
                        spawn,
                    } => {
                        self.rows_cleared += rows_cleared;
                        match spawn {
                            SpawnOutcome::Spawned => TickOutcome::Locked { rows_cleared },
                            SpawnOutcome::Blocked => {
                                self.end_round();
                                TickOutcome::GameOver
                            }
                        }
                    }
                    GravityOutcome::NoPiece => {
                        self.end_round();
                        TickOutcome::GameOver
                    }
                }
            }
            RoundState::GameOver => {
                self.flash_lit = !self.flash_lit;
                self.engine.painter_mut().game_over(self.flash_lit);
                TickOutcome::Flash {
                    lit: self.flash_lit,
                }
            }
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.engine.active()
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn engine_mut(&mut self) -> &mut BlockEngine<P> {
        &mut self.engine
    }

    pub fn painter(&self) -> &P {
        self.engine.painter()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.state = self.state;
        out.round = self.round;
        out.rows_cleared = self.rows_cleared;
        out.active = self.engine.active().map(ActiveSnapshot::from);
        self.engine.grid().write_rows(&mut out.rows);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{NullPainter, PaintOp, RecordingPainter};
    use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

    #[test]
    fn test_lifecycle_idle_running() {
        let mut game = Game::new(12345, NullPainter);
        assert_eq!(game.state(), RoundState::Idle);
        assert_eq!(game.tick(), TickOutcome::Idle);

        assert!(game.start());
        assert_eq!(game.state(), RoundState::Running);
        assert!(game.active().is_some());
        assert_eq!(game.round(), 1);
        assert!(!game.start());
    }

    #[test]
    fn test_commands_ignored_until_started() {
        let mut game = Game::new(1, NullPainter);
        assert_eq!(game.apply(Command::MoveLeft), CommandOutcome::Ignored);
        assert_eq!(game.apply(Command::Rotate), CommandOutcome::Ignored);
        assert!(game.active().is_none());
    }

    #[test]
    fn test_restart_from_idle_starts_round() {
        let mut game = Game::new(1, NullPainter);
        assert_eq!(game.apply(Command::Restart), CommandOutcome::Applied);
        assert_eq!(game.state(), RoundState::Running);
    }

    #[test]
    fn test_blocked_spawn_ends_round_and_flashes() {
        let mut game = Game::new(3, RecordingPainter::new());
        game.start();

        // Columns 1-8 above the floor: no row is full, and the spawn area is covered.
        for y in 1..GRID_HEIGHT as i8 {
            for x in 1..GRID_WIDTH as i8 {
                game.engine_mut().grid_mut().set(x, y, Some(PieceKind::Z));
            }
        }
        // The active piece is already resting on the stack and locks on this tick.
        assert_eq!(game.tick(), TickOutcome::GameOver);
        assert_eq!(game.state(), RoundState::GameOver);
        assert!(game.active().is_none());

        assert_eq!(game.apply(Command::MoveLeft), CommandOutcome::Ignored);
        assert_eq!(game.tick(), TickOutcome::Flash { lit: true });
        assert_eq!(game.tick(), TickOutcome::Flash { lit: false });
        assert_eq!(
            game.painter().ops().last(),
            Some(&PaintOp::GameOver { lit: false })
        );
    }

    #[test]
    fn test_restart_clears_grid() {
        let mut game = Game::new(9, NullPainter);
        game.start();
        game.engine_mut().grid_mut().set(0, 0, Some(PieceKind::I));
        game.engine_mut().grid_mut().set(8, 3, Some(PieceKind::I));

        game.apply(Command::Restart);
        assert_eq!(game.state(), RoundState::Running);
        assert_eq!(game.grid().occupied_count(), 0);
        assert_eq!(game.round(), 2);
        assert!(game.active().is_some());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut game = Game::new(5, NullPainter);
        game.start();
        game.engine_mut().grid_mut().set(2, 0, Some(PieceKind::T));

        let snap = game.snapshot();
        assert!(snap.running());
        assert!(snap.is_occupied(2, 0));
        assert_eq!(snap.occupied_count(), 1);
        assert_eq!(
            snap.active.map(|a| a.cells()),
            game.active().map(|a| a.cells())
        );
    }
}
