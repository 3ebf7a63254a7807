//! Snapshot module - owned per-frame copy of a session for renderers

use crate::piece::{ActivePiece, NextPiece};
use crate::types::{ColorIndex, RoundState, EMPTY};

/// Owned copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub width: u16,
    pub height: u16,
    /// Locked cells, row-major
    pub cells: Vec<ColorIndex>,
    pub current: ActivePiece,
    pub next: NextPiece,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub state: RoundState,
    pub fall_interval_ms: u32,
}

impl SessionSnapshot {
    /// Locked cell at (x, y); out of range reads as empty
    pub fn cell(&self, x: i32, y: i32) -> ColorIndex {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return EMPTY;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn paused(&self) -> bool {
        self.state == RoundState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.state == RoundState::GameOver
    }

    pub fn playable(&self) -> bool {
        self.state == RoundState::Playing
    }
}
