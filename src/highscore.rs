//! High score persistence.
//!
//! The engine only ever calls [`HighScoreStore::load`] once at construction and
//! [`HighScoreStore::save`] once at game over, when the session beat the stored value.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PersistenceError;

pub trait HighScoreStore {
    fn load(&self) -> Result<u32, PersistenceError>;
    fn save(&mut self, score: u32) -> Result<(), PersistenceError>;
}

/// Keeps the high score in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    high_score: u32,
    saves: usize,
}

impl MemoryHighScores {
    pub fn new(high_score: u32) -> Self {
        Self { high_score, saves: 0 }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// How many times [`HighScoreStore::save`] was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScores {
    fn load(&self) -> Result<u32, PersistenceError> {
        Ok(self.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), PersistenceError> {
        self.high_score = score;
        self.saves += 1;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Stores the high score as `{"high_score": n}` in a JSON file.
///
/// A missing file reads as a high score of 0.
#[derive(Debug, Clone)]
pub struct JsonHighScores {
    path: PathBuf,
}

impl JsonHighScores {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonHighScores {
    fn load(&self) -> Result<u32, PersistenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No high score file yet");
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };
        let file: HighScoreFile = serde_json::from_str(&contents)?;
        Ok(file.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), PersistenceError> {
        let contents = serde_json::to_string(&HighScoreFile { high_score: score })?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), score, "High score written");
        Ok(())
    }
}
