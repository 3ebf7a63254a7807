//! Log setup for the terminal binary.
//!
//! The terminal is owned by the game screen, so logs only go to a file and
//! only when a path is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::Level;

/// Install a global subscriber appending to `path`. Returns whether logging is on.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_path() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn test_unopenable_path_is_an_error() {
        let dir = std::env::temp_dir();
        let err = init(Some(&dir)).unwrap_err();
        assert!(err.to_string().contains("opening log file"));
    }
}
