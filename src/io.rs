//! High-score persistence: a plain-text file holding one non-negative integer.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

#[derive(Debug, thiserror::Error)]
pub enum HighScoreError {
    #[error("cannot read high score from {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("cannot write high score to {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

/// Where the high score lives between runs.
pub trait HighScoreStore {
    /// The stored score; 0 when nothing usable has been stored.
    fn load(&self) -> Result<u32, HighScoreError>;
    fn save(&mut self, score: u32) -> Result<(), HighScoreError>;
}

/// Parse file contents the way `>>` into an int would: leading integer or 0.
pub fn parse_high_score(text: &str) -> Option<u32> {
    let token = text.split_whitespace().next()?;
    let digits: &str = &token[..token.find(|c: char| !c.is_ascii_digit()).unwrap_or(token.len())];
    digits.parse().ok()
}

#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> Result<u32, HighScoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(HighScoreError::Read { path: self.path.clone(), source }),
        };
        Ok(parse_high_score(&text).unwrap_or_else(|| {
            warn!("{} holds no valid score, treating it as 0", self.path.display());
            0
        }))
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_string())
            .map_err(|source| HighScoreError::Write { path: self.path.clone(), source })
    }
}

/// Non-persistent store for headless runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryHighScore {
    pub value: u32,
    pub saves: usize,
}

impl InMemoryHighScore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }
}

impl HighScoreStore for InMemoryHighScore {
    fn load(&self) -> Result<u32, HighScoreError> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<(), HighScoreError> {
        self.value = score;
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fruitsnake-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_loads_zero() {
        let store = HighScoreFile::new(scratch_dir("missing").join("nope.txt"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn garbage_loads_zero() {
        let path = scratch_dir("garbage").join("highscore.txt");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(HighScoreFile::new(&path).load().unwrap(), 0);
        fs::write(&path, "").unwrap();
        assert_eq!(HighScoreFile::new(&path).load().unwrap(), 0);
        fs::write(&path, "-3").unwrap();
        assert_eq!(HighScoreFile::new(&path).load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let path = scratch_dir("roundtrip").join("highscore.txt");
        let mut store = HighScoreFile::new(&path);
        store.save(20).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "20");
        assert_eq!(store.load().unwrap(), 20);
    }

    #[test]
    fn parses_leading_integer() {
        assert_eq!(parse_high_score("12\n"), Some(12));
        assert_eq!(parse_high_score("  7 trailing"), Some(7));
        assert_eq!(parse_high_score("15abc"), Some(15));
        assert_eq!(parse_high_score("abc"), None);
    }

    #[test]
    fn unwritable_path_reports_error() {
        let dir = scratch_dir("unwritable");
        // A directory cannot be overwritten as a file.
        let mut store = HighScoreFile::new(&dir);
        assert!(matches!(store.save(1), Err(HighScoreError::Write { .. })));
    }
}
