//! Leaderboard persistence.
//!
//! Keeps the best scores in a small JSON file next to the game:
//!
//! ```json
//! [
//!   { "name": "ann", "score": 1200 }
//! ]
//! ```
//!
//! Loading never fails; a broken file starts a fresh board.

pub mod error;
pub mod store;

pub use blockfall_types as types;

pub use error::{RankingError, Result};
pub use store::{RankingEntry, RankingStore};
