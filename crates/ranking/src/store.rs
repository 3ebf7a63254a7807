//! JSON-file-backed leaderboard.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{RankingError, Result};
use crate::types::MAX_RANKING;

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: u32,
}

impl RankingEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Top-N scores, best first, mirrored to a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct RankingStore {
    path: PathBuf,
    max_entries: usize,
    entries: Vec<RankingEntry>,
}

impl RankingStore {
    /// Load the ranking at `path`
    ///
    /// A missing, unreadable, or malformed file yields an empty ranking.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match load(&path) {
            Ok(entries) => entries,
            Err(err) => {
                if path.exists() {
                    warn!(error = %err, "ignoring unreadable ranking file");
                } else {
                    debug!(path = %path.display(), "no ranking file yet");
                }
                Vec::new()
            }
        };

        let mut store = Self {
            path,
            max_entries: MAX_RANKING,
            entries,
        };
        store.normalize();
        store
    }

    /// Keep at most `max_entries` rows
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self.normalize();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Rows sorted by descending score
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// Whether `score` would earn a place on the board
    pub fn qualifies(&self, score: u32) -> bool {
        if self.max_entries == 0 {
            return false;
        }
        self.entries.len() < self.max_entries
            || self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Record a score and persist the board
    ///
    /// Ties rank below existing entries. Returns the zero-based position,
    /// or `None` if the score did not make the cut (nothing is written).
    /// The in-memory board only changes once the file is written.
    pub fn submit(&mut self, name: &str, score: u32) -> Result<Option<usize>> {
        if !self.qualifies(score) {
            debug!(name, score, "score below leaderboard cut");
            return Ok(None);
        }

        let pos = self.entries.partition_point(|e| e.score >= score);
        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.extend_from_slice(&self.entries[..pos]);
        updated.push(RankingEntry::new(name, score));
        updated.extend_from_slice(&self.entries[pos..]);
        updated.truncate(self.max_entries);

        write_entries(&self.path, &updated)?;
        self.entries = updated;

        info!(name, score, rank = pos + 1, "leaderboard updated");
        Ok(Some(pos))
    }

    /// Write the board to disk as pretty JSON
    pub fn save(&self) -> Result<()> {
        write_entries(&self.path, &self.entries)
    }

    fn normalize(&mut self) {
        // Stable: equal scores keep file order.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.max_entries);
    }
}

fn write_entries(path: &Path, entries: &[RankingEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json).map_err(|source| RankingError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load(path: &Path) -> Result<Vec<RankingEntry>> {
    let data = fs::read_to_string(path).map_err(|source| RankingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("blockfall_ranking_{}_{}.json", tag, nanos))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = RankingStore::open(temp_path("missing"));
        assert!(store.entries().is_empty());
        assert_eq!(store.max_entries(), 5);
        assert!(store.qualifies(0));
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let path = temp_path("malformed");
        fs::write(&path, "{not json").unwrap();
        let store = RankingStore::open(&path);
        assert!(store.entries().is_empty());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_submit_keeps_top_five_sorted() {
        let path = temp_path("top5");
        let mut store = RankingStore::open(&path);
        for (name, score) in [("a", 300), ("b", 100), ("c", 500), ("d", 200), ("e", 400)] {
            store.submit(name, score).unwrap();
        }
        assert!(!store.qualifies(100));
        assert_eq!(store.submit("f", 50).unwrap(), None);
        assert_eq!(store.submit("g", 450).unwrap(), Some(1));

        let scores: Vec<u32> = store.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![500, 450, 400, 300, 200]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_ties_rank_below_existing() {
        let path = temp_path("ties");
        let mut store = RankingStore::open(&path);
        store.submit("old", 100).unwrap();
        assert_eq!(store.submit("new", 100).unwrap(), Some(1));
        assert_eq!(store.entries()[0].name, "old");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_is_pretty_json_array() {
        let path = temp_path("format");
        let mut store = RankingStore::open(&path);
        store.submit("ann", 1200).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, serde_json::json!([{ "name": "ann", "score": 1200 }]));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_oversized_file_is_trimmed_on_load() {
        let path = temp_path("trim");
        let rows: Vec<RankingEntry> = (0..8).map(|i| RankingEntry::new(format!("p{}", i), i * 10)).collect();
        fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

        let store = RankingStore::open(&path);
        let scores: Vec<u32> = store.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![70, 60, 50, 40, 30]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_zero_capacity_never_qualifies() {
        let store = RankingStore::open(temp_path("zero")).with_max_entries(0);
        assert!(!store.qualifies(u32::MAX));
    }

    #[test]
    fn test_save_error_names_path() {
        let dir = temp_path("dir");
        fs::create_dir_all(&dir).unwrap();
        let mut store = RankingStore::open(&dir);
        let err = store.submit("x", 1).unwrap_err();
        assert!(matches!(err, RankingError::Io { .. }));
        assert!(err.to_string().contains("blockfall_ranking_dir"));
        fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_failed_write_leaves_board_unchanged() {
        let path = temp_path("rollback");
        let mut store = RankingStore::open(&path);
        store.submit("kept", 700).unwrap();
        fs::remove_file(&path).ok();

        // Replace the file with a directory so the next write fails.
        fs::create_dir_all(&path).unwrap();
        assert!(store.submit("lost", 900).is_err());
        assert_eq!(store.entries(), &[RankingEntry::new("kept", 700)]);
        fs::remove_dir(&path).ok();
    }
}
