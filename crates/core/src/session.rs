//! Game session - owns the grid and piece state and runs the round
//!
//! A session drives the spawn → fall → lock → clear → respawn cycle. The
//! outer loop feeds it commands and elapsed frame time; it never blocks and
//! never performs I/O.

use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::piece::{ActivePiece, NextPiece};
use crate::rng::RandomIndex;
use crate::scoring::{calculate_level, calculate_line_score, get_fall_interval_ms};
use crate::shapes::Shape;
use crate::snapshot::SessionSnapshot;
use crate::timer::FallTimer;
use crate::types::{ColorIndex, GameCommand, RoundState};

/// Outcome of the most recent lock (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    /// Level after the lock, if it changed
    pub new_level: Option<u32>,
    /// Whether the respawn that followed the lock ended the round
    pub game_over: bool,
}

/// One round of play plus everything needed to restart it
#[derive(Debug, Clone)]
pub struct Session<R> {
    config: GameConfig,
    grid: Grid,
    current: ActivePiece,
    next: NextPiece,
    score: u32,
    level: u32,
    lines: u32,
    state: RoundState,
    timer: FallTimer,
    rng: R,
    last_event: Option<LockEvent>,
}

fn draw_piece<R: RandomIndex>(shapes: &[Shape], rng: &mut R) -> NextPiece {
    let index = rng.next_index(shapes.len()).min(shapes.len().saturating_sub(1));
    NextPiece {
        shape: shapes[index].clone(),
        color: (index + 1) as ColorIndex,
    }
}

impl<R: RandomIndex> Session<R> {
    /// Validate `config` and start a round
    ///
    /// The first draw becomes the current piece, the second the next piece.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.grid_width, config.grid_height);
        let first = draw_piece(&config.shapes, &mut rng);
        let next = draw_piece(&config.shapes, &mut rng);
        let current = ActivePiece::spawn(first, config.grid_width);
        let timer = FallTimer::new(get_fall_interval_ms(1, &config.level_speeds_ms));

        let mut session = Self {
            config,
            grid,
            current,
            next,
            score: 0,
            level: 1,
            lines: 0,
            state: RoundState::Playing,
            timer,
            rng,
            last_event: None,
        };
        if session.current.collides(&session.grid) {
            session.end_round();
        }
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &ActivePiece {
        &self.current
    }

    pub fn next(&self) -> &NextPiece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total lines cleared this round
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn game_over(&self) -> bool {
        self.state == RoundState::GameOver
    }

    pub fn paused(&self) -> bool {
        self.state == RoundState::Paused
    }

    /// Gravity interval for the current level
    pub fn fall_interval_ms(&self) -> u32 {
        get_fall_interval_ms(self.level, &self.config.level_speeds_ms)
    }

    /// Time accumulated toward the next gravity step
    pub fn fall_elapsed_ms(&self) -> u32 {
        self.timer.elapsed_ms()
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.current.clone_from(&self.current);
        out.next.clone_from(&self.next);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.state = self.state;
        out.fall_interval_ms = self.fall_interval_ms();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            cells: self.grid.cells().to_vec(),
            current: self.current.clone(),
            next: self.next.clone(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            state: self.state,
            fall_interval_ms: self.fall_interval_ms(),
        }
    }

    /// Dispatch one command. Returns whether the state changed.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Feed elapsed frame time to the fall timer; ticks when it fires
    ///
    /// Time does not accumulate while paused or after game over.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.state != RoundState::Playing {
            return false;
        }
        if self.timer.advance(elapsed_ms) {
            self.tick()
        } else {
            false
        }
    }

    /// One gravity step: fall a row, or lock and respawn
    pub fn tick(&mut self) -> bool {
        if self.state != RoundState::Playing {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.state == RoundState::Playing && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.state == RoundState::Playing && self.try_move(1, 0)
    }

    /// Move down one row if free. Never locks.
    pub fn soft_drop(&mut self) -> bool {
        self.state == RoundState::Playing && self.try_move(0, 1)
    }

    /// Rotate clockwise around the unchanged anchor (no wall kicks)
    pub fn rotate(&mut self) -> bool {
        if self.state != RoundState::Playing {
            return false;
        }
        let rotated = self.current.shape.rotate_clockwise();
        if self.grid.collides(&rotated, self.current.x, self.current.y) {
            return false;
        }
        self.current.shape = rotated;
        true
    }

    /// Playing ↔ Paused. No effect after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.state = match self.state {
            RoundState::Playing => RoundState::Paused,
            RoundState::Paused => RoundState::Playing,
            RoundState::GameOver => return false,
        };
        debug!(state = ?self.state, "pause toggled");
        true
    }

    /// Start a fresh round from any state
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.state = RoundState::Playing;
        self.last_event = None;
        self.timer.set_interval(self.fall_interval_ms());
        self.next = draw_piece(&self.config.shapes, &mut self.rng);
        self.spawn_piece();
        debug!("round reset");
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let (x, y) = (self.current.x + dx, self.current.y + dy);
        if self.grid.collides(&self.current.shape, x, y) {
            return false;
        }
        self.current.x = x;
        self.current.y = y;
        true
    }

    /// Promote next to current and draw a fresh next
    ///
    /// A spawn that collides ends the round; the blocked piece stays current.
    fn spawn_piece(&mut self) {
        let fresh = draw_piece(&self.config.shapes, &mut self.rng);
        let promoted = std::mem::replace(&mut self.next, fresh);
        self.current = ActivePiece::spawn(promoted, self.grid.width());
        debug!(
            piece = self.current.kind().map_or("?", |k| k.letter()),
            x = self.current.x,
            next = self.next.kind().map_or("?", |k| k.letter()),
            "spawned piece"
        );
        if self.current.collides(&self.grid) {
            self.end_round();
        }
    }

    fn lock_piece(&mut self) {
        self.grid.merge(
            &self.current.shape,
            self.current.x,
            self.current.y,
            self.current.color,
        );

        let cleared = self.grid.clear_full_lines();
        self.lines = self.lines.saturating_add(cleared as u32);

        let mut points = 0;
        let mut new_level = None;
        if cleared > 0 {
            points = calculate_line_score(cleared, self.level, &self.config.score_multipliers);
            self.score = self.score.saturating_add(points);

            let level = calculate_level(self.score, self.level, &self.config.level_thresholds);
            if level != self.level {
                self.level = level;
                self.timer.set_interval(self.fall_interval_ms());
                new_level = Some(level);
                info!(level, score = self.score, "level up");
            }
        }

        self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            points,
            new_level,
            game_over: self.state == RoundState::GameOver,
        });
    }

    fn end_round(&mut self) {
        self.state = RoundState::GameOver;
        self.timer.reset();
        info!(score = self.score, level = self.level, lines = self.lines, "game over");
    }
}
