use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The best score achieved so far, as stored on disk
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct HighScore {
    #[serde(rename = "snakeHighScore")]
    pub(crate) score: u32,
}

/// Where the high score is kept.  A file with no path (because none was
/// configured and the local data directory could not be determined) cannot
/// be loaded or saved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    path: Option<PathBuf>,
    /// The last score known to be on disk
    stored: u32,
}

impl HighScoreFile {
    pub(crate) fn new(path: Option<PathBuf>) -> HighScoreFile {
        HighScoreFile { path, stored: 0 }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the high score from disk.  A missing file counts as a high score
    /// of zero.
    pub(crate) fn load(&mut self) -> Result<u32, StoreError> {
        let path = self.path.as_deref().ok_or(StoreError::NoPath)?;
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let HighScore { score } = serde_json::from_slice(&src)?;
        self.stored = score;
        Ok(score)
    }

    /// Like [`HighScoreFile::load()`], but any failure is logged and treated
    /// as a high score of zero.  With no path there is nothing to read, and
    /// zero is returned quietly.
    pub(crate) fn load_or_default(&mut self) -> u32 {
        if self.path.is_none() {
            return 0;
        }
        match self.load() {
            Ok(score) => score,
            Err(e) => {
                log::warn!(
                    "Failed to load high score: {}",
                    crate::util::error_chain(&e)
                );
                0
            }
        }
    }

    /// Write `score` to disk if it beats the last score loaded or saved.
    /// Returns `true` if the file was written.
    pub(crate) fn record(&mut self, score: u32) -> Result<bool, StoreError> {
        if score <= self.stored {
            return Ok(false);
        }
        self.save(HighScore { score })?;
        self.stored = score;
        Ok(true)
    }

    fn save(&self, high_score: HighScore) -> Result<(), StoreError> {
        let path = self.path.as_deref().ok_or(StoreError::NoPath)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent)?;
        }
        let mut src = serde_json::to_string(&high_score)?;
        src.push('\n');
        fs_err::write(path, &src)?;
        Ok(())
    }
}

/// Error returned when the high score file cannot be read or written
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("no location is known for the high score file")]
    NoPath,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("high score file is not in the expected format")]
    Json(#[from] serde_json::Error),
}
