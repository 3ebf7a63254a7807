//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the grid, the
//! shape catalog, collision and rotation, scoring and leveling, and the
//! session that ties them together. It has **no dependencies** on terminals,
//! files, or clocks:
//!
//! - **Deterministic**: piece selection goes through an injected [`RandomIndex`]
//! - **Testable**: every rule is reachable from plain method calls
//! - **Portable**: the frame loop only passes in elapsed milliseconds
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size playfield with collision, merge, and line clearing
//! - [`shapes`]: the seven piece shapes and clockwise rotation
//! - [`piece`]: the falling piece and the queued next piece
//! - [`scoring`]: line-clear points, level thresholds, fall intervals
//! - [`timer`]: the fall-timer accumulator
//! - [`session`]: the round orchestrator and its commands
//! - [`config`]: validated engine configuration
//! - [`rng`]: injectable random index sources
//!
//! # Game Rules
//!
//! - Pieces spawn centered on row 0; a blocked spawn ends the round
//! - Rotation is clockwise around the bounding box corner, with no wall kicks
//! - Soft drop moves one row and never locks; only gravity locks
//! - Clearing `n` lines scores `n * 100 * multiplier[n] * level`
//! - The level rises at most one threshold scan per lock and never falls
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, ScriptedIndices, Session};
//! use blockfall_core::types::GameCommand;
//!
//! // Always deal the O piece (catalog index 1)
//! let mut session = Session::new(GameConfig::default(), ScriptedIndices::repeat(1)).unwrap();
//!
//! session.apply(GameCommand::MoveLeft);
//! assert_eq!(session.current().x, 3);
//!
//! // 500ms at level 1 triggers one gravity step
//! assert!(session.advance(500));
//! assert_eq!(session.current().y, 1);
//! ```
//!
//! # Timing
//!
//! Call [`Session::advance`] every frame with the elapsed time. The timer
//! fires once its level's interval is reached, runs one [`Session::tick`],
//! and starts over.

pub mod config;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use grid::Grid;
pub use piece::{ActivePiece, NextPiece};
pub use rng::{RandomIndex, ScriptedIndices, SimpleRng, SystemRandom};
pub use scoring::{calculate_level, calculate_line_score, get_fall_interval_ms};
pub use session::{LockEvent, Session};
pub use shapes::{rotate_clockwise, standard_catalog, Shape};
pub use snapshot::SessionSnapshot;
pub use timer::FallTimer;
