//! Runtime configuration for the terminal binary.

use std::path::PathBuf;

use crate::types::DEFAULT_FPS;

pub const DEFAULT_RANKING_FILE: &str = "blockfall_ranking.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Leaderboard JSON file
    pub ranking_path: PathBuf,
    /// Fixed piece seed; `None` draws from the OS
    pub seed: Option<u32>,
    /// Frame rate of the render/input loop
    pub fps: u32,
    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ranking_path: PathBuf::from(DEFAULT_RANKING_FILE),
            seed: None,
            fps: DEFAULT_FPS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `BLOCKFALL_RANKING_FILE`: leaderboard path
    /// - `BLOCKFALL_SEED`: deterministic pieces
    /// - `BLOCKFALL_FPS`: frame rate (1..=240)
    /// - `BLOCKFALL_LOG_PATH`: write logs to this file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let ranking_path = non_empty("BLOCKFALL_RANKING_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RANKING_FILE));

        let seed = non_empty("BLOCKFALL_SEED").and_then(|s| s.parse().ok());

        let fps = non_empty("BLOCKFALL_FPS")
            .and_then(|s| s.parse().ok())
            .filter(|fps| (1..=240).contains(fps))
            .unwrap_or(DEFAULT_FPS);

        let log_path = non_empty("BLOCKFALL_LOG_PATH").map(PathBuf::from);

        Self {
            ranking_path,
            seed,
            fps,
            log_path,
        }
    }

    /// Duration of one frame in milliseconds
    pub fn frame_ms(&self) -> u64 {
        1000 / self.fps.max(1) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ranking_path, PathBuf::from("blockfall_ranking.json"));
        assert_eq!(config.frame_ms(), 16);
    }

    #[test]
    fn test_reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BLOCKFALL_RANKING_FILE", "/tmp/scores.json"),
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_FPS", "30"),
            ("BLOCKFALL_LOG_PATH", " /tmp/blockfall.log "),
        ]));
        assert_eq!(config.ranking_path, PathBuf::from("/tmp/scores.json"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.fps, 30);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BLOCKFALL_SEED", "abc"),
            ("BLOCKFALL_FPS", "0"),
            ("BLOCKFALL_LOG_PATH", "   "),
            ("BLOCKFALL_RANKING_FILE", ""),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = AppConfig::from_env();
    }
}
