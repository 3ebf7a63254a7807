//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]s and menu
//! choices, collects each frame's key presses, and provides the bounded
//! player-name buffer used by the leaderboard prompt.

pub mod events;
pub mod map;
pub mod name_entry;

pub use blockfall_types as types;

pub use events::{drain_key_presses, key_press, KeyBatch, MAX_KEYS_PER_FRAME};
pub use map::{
    game_over_choice, handle_key_event, is_back, is_interrupt, main_menu_choice, should_quit,
    GameOverChoice, MenuChoice,
};
pub use name_entry::{NameEntry, NameEntryEvent};
