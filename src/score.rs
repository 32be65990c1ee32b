use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "gridsnake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failure modes of the high-score persistence layer.
///
/// These are always best-effort for the running game: the controller records
/// them and keeps ticking with its in-memory value.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// High-score persistence collaborator injected into the game controller.
pub trait HighScoreStore {
    /// Loads the persisted high score. A missing store reads as 0.
    fn load(&self) -> Result<u32, ScoreError>;

    /// Persists a new high score.
    fn save(&mut self, score: u32) -> Result<(), ScoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// JSON-file-backed store in the platform data directory.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Creates a store at the platform-correct score file path.
    #[must_use]
    pub fn new() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);
        Self { path: base }
    }

    /// Creates a store backed by an explicit path.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the score file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScoreStore for FileScoreStore {
    fn load(&self) -> Result<u32, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let file: ScoreFile = serde_json::from_str(&raw)?;
        Ok(file.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = ScoreFile { high_score: score };
        let json = serde_json::to_string_pretty(&payload)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and for running without persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScoreStore {
    high_score: u32,
    saves: u32,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }

    /// Returns how many times `save` was called.
    #[must_use]
    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32, ScoreError> {
        Ok(self.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        self.high_score = score;
        self.saves += 1;
        Ok(())
    }
}

/// Shared-handle store. Lets a caller keep a view onto a store after handing
/// it to the game controller, which tests use to observe saves.
impl<S: HighScoreStore> HighScoreStore for Rc<RefCell<S>> {
    fn load(&self) -> Result<u32, ScoreError> {
        self.borrow().load()
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        self.borrow_mut().save(score)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileScoreStore, HighScoreStore, MemoryScoreStore};

    #[test]
    fn score_serialization_round_trip() {
        let path = unique_test_path("round_trip");
        let mut store = FileScoreStore::at_path(&path);

        store.save(42).expect("score save should succeed");
        let loaded = store.load().expect("load should succeed");

        assert_eq!(loaded, 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_returns_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let store = FileScoreStore::at_path(&path);
        assert_eq!(store.load().expect("missing file should read as 0"), 0);
    }

    #[test]
    fn malformed_score_file_returns_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let store = FileScoreStore::at_path(&path);
        assert!(store.load().is_err(), "malformed file should return Err");

        cleanup_test_path(&path);
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryScoreStore::with_high_score(5);
        assert_eq!(store.load().unwrap(), 5);

        store.save(30).unwrap();
        store.save(40).unwrap();

        assert_eq!(store.load().unwrap(), 40);
        assert_eq!(store.save_count(), 2);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("gridsnake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
