//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! Views render into a simple framebuffer that is then flushed to the
//! terminal by a diffing renderer.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so every screen can be asserted on in unit tests
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use menu_view::MenuView;
pub use renderer::{encode_frame_into, TerminalRenderer};
