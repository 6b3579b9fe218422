//! High-score persistence: one unsigned integer in a plain-text file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const MAX_SCORE: u32 = 100_000;
pub const FILE_NAME: &str = "hs.txt";

pub trait ScoreStore {
    fn load(&self) -> io::Result<u32>;
    fn save(&self, score: u32) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for ScoreFile {
    fn load(&self) -> io::Result<u32> {
        let text = fs::read_to_string(&self.path)?;
        parse_score(&text)
    }

    fn save(&self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, score.min(MAX_SCORE).to_string())
    }
}

/// Parses the stored value, clamping anything above `MAX_SCORE`.
pub fn parse_score(text: &str) -> io::Result<u32> {
    let value: u64 = text
        .trim()
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(value.min(MAX_SCORE as u64) as u32)
}

/// Loads the high score, treating a missing or unreadable store as 0.
pub fn load_or_default(store: &dyn ScoreStore) -> u32 {
    match store.load() {
        Ok(score) => score.min(MAX_SCORE),
        Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
        Err(err) => {
            log::warn!("high score unreadable, starting from 0: {err}");
            0
        }
    }
}
