use crate::util::high_score_file_path;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Name recorded when the player leaves the name prompt blank, and the name
/// on the default record
pub(crate) const ANONYMOUS: &str = "Anonymous";

/// The best score achieved on this machine, persisted between runs as a
/// single JSON object.
///
/// The invariant that the stored record is only ever replaced by a strictly
/// greater score is enforced by the caller (the game only opens the name
/// prompt when `score > high_score.score()`).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub(crate) struct HighScore {
    score: u32,
    name: String,
}

impl HighScore {
    pub(crate) fn new(score: u32, name: String) -> HighScore {
        HighScore { score, name }
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Read the persisted record.  Any failure — no data directory, missing
    /// or unreadable file, malformed JSON, out-of-range score, blank name —
    /// yields the default record instead of an error.
    pub(crate) fn load() -> HighScore {
        high_score_file_path().map_or_else(HighScore::default, |p| HighScore::load_from(&p))
    }

    fn load_from(path: &Path) -> HighScore {
        let Ok(src) = fs_err::read(path) else {
            return HighScore::default();
        };
        serde_json::from_slice::<RawHighScore>(&src)
            .ok()
            .and_then(RawHighScore::validate)
            .unwrap_or_default()
    }

    /// Write the record to disk.  Callers treat this as best-effort: the
    /// in-memory record is authoritative for the rest of the session.
    pub(crate) fn save(&self) -> Result<(), SaveError> {
        let path = high_score_file_path().ok_or(SaveError::NoPath)?;
        self.save_to(&path)
    }

    fn save_to(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::Mkdir)?;
        }
        let mut src = serde_json::to_string(self).map_err(SaveError::Serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::Write)?;
        Ok(())
    }
}

impl Default for HighScore {
    fn default() -> HighScore {
        HighScore {
            score: 0,
            name: String::from(ANONYMOUS),
        }
    }
}

/// The untrusted on-disk form of [`HighScore`]
#[derive(Clone, Debug, Deserialize)]
struct RawHighScore {
    score: serde_json::Number,
    name: String,
}

impl RawHighScore {
    /// Accept only a non-negative integral score that fits in a `u32` and a
    /// name with some non-whitespace content
    fn validate(self) -> Option<HighScore> {
        let score = self
            .score
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())?;
        let name = self.name.trim();
        (!name.is_empty()).then(|| HighScore {
            score,
            name: name.to_owned(),
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum SaveError {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score to disk")]
    Write(#[source] std::io::Error),
}
