//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core,input,ranking,term,types}`
//! and hosts the application layer that wires them into a playable program.

pub mod app;
pub mod config;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_ranking as ranking;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use app::{App, AppControl};
pub use config::AppConfig;
