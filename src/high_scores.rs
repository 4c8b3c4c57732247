//! Per-mode best scores, persisted as a flat JSON table.
//!
//! ```text
//! {"easy": 12, "medium": 0, "hard": 3, "endless": 0}
//! ```

use crate::core::constants::HIGHSCORE_FILE;
use crate::core::difficulty::Mode;
use crate::error::Result;
use crate::utils::persistence::{load_json, save_json};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Best score per mode. Every mode always has an entry; keys missing from
/// the file read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScores {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub endless: u32,
}

impl HighScores {
    pub fn get(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Easy => self.easy,
            Mode::Medium => self.medium,
            Mode::Hard => self.hard,
            Mode::Endless => self.endless,
        }
    }

    fn slot_mut(&mut self, mode: Mode) -> &mut u32 {
        match mode {
            Mode::Easy => &mut self.easy,
            Mode::Medium => &mut self.medium,
            Mode::Hard => &mut self.hard,
            Mode::Endless => &mut self.endless,
        }
    }

    /// Keep the larger of the stored and new score. Returns true on a new best.
    pub fn record(&mut self, mode: Mode, score: u32) -> bool {
        let slot = self.slot_mut(mode);
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }

    /// Mode holding the highest score. Ties go to the first mode in
    /// easy, medium, hard, endless order.
    pub fn best_overall(&self) -> (Mode, u32) {
        Mode::ALL
            .iter()
            .fold((Mode::Easy, self.easy), |best, &mode| {
                let score = self.get(mode);
                if score > best.1 {
                    (mode, score)
                } else {
                    best
                }
            })
    }
}

/// Loads and saves the high score table at a fixed path.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store named `highscore.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::at(dir.join(HIGHSCORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table. A missing file is an all-zero table; a malformed one
    /// is an error rather than a silent reset.
    pub fn load(&self) -> Result<HighScores> {
        let scores = load_json(&self.path)?;
        debug!(path = %self.path.display(), ?scores, "loaded high scores");
        Ok(scores)
    }

    /// Record `score` for `mode` (max, not overwrite) and persist the whole
    /// table. Returns the updated table.
    pub fn save(&self, score: u32, mode: Mode) -> Result<HighScores> {
        let mut scores = self.load()?;
        if scores.record(mode, score) {
            info!(%mode, score, "new high score");
        }
        save_json(&self.path, &scores)?;
        Ok(scores)
    }

    pub fn best_overall(&self) -> Result<(Mode, u32)> {
        Ok(self.load()?.best_overall())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let scores = HighScores::default();
        for mode in Mode::ALL {
            assert_eq!(scores.get(mode), 0);
        }
    }

    #[test]
    fn test_record_keeps_max() {
        let mut scores = HighScores::default();
        assert!(scores.record(Mode::Hard, 4));
        assert!(!scores.record(Mode::Hard, 2));
        assert!(!scores.record(Mode::Hard, 4));
        assert_eq!(scores.get(Mode::Hard), 4);
        assert_eq!(scores.get(Mode::Easy), 0);
    }

    #[test]
    fn test_best_overall_first_max_wins() {
        let scores = HighScores {
            easy: 3,
            medium: 9,
            hard: 9,
            endless: 1,
        };
        assert_eq!(scores.best_overall(), (Mode::Medium, 9));
    }

    #[test]
    fn test_best_overall_all_zero() {
        assert_eq!(HighScores::default().best_overall(), (Mode::Easy, 0));
    }

    #[test]
    fn test_json_shape() {
        let scores = HighScores {
            easy: 1,
            medium: 2,
            hard: 3,
            endless: 4,
        };
        let value = serde_json::to_value(scores).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"easy": 1, "medium": 2, "hard": 3, "endless": 4})
        );
    }

    #[test]
    fn test_missing_keys_read_as_zero() {
        let scores: HighScores = serde_json::from_str(r#"{"hard": 7}"#).unwrap();
        assert_eq!(scores.get(Mode::Hard), 7);
        assert_eq!(scores.get(Mode::Easy), 0);
        assert_eq!(scores.get(Mode::Endless), 0);
    }

    #[test]
    fn test_negative_score_rejected() {
        let result: serde_json::Result<HighScores> = serde_json::from_str(r#"{"easy": -1}"#);
        assert!(result.is_err());
    }
}
