/// Error types for the ranking store
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for ranking operations
pub type Result<T> = std::result::Result<T, RankingError>;

/// Errors that can occur while persisting the leaderboard
#[derive(Debug, Error)]
pub enum RankingError {
    /// Reading or writing the ranking file failed
    #[error("ranking file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error("ranking JSON: {0}")]
    Json(#[from] serde_json::Error),
}
