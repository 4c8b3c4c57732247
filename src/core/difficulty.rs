//! Game modes and their difficulty presets.
//!
//! Each mode maps to an immutable `DifficultyConfig`. Endless mode additionally
//! drifts pipe spacing, time step and gravity as wall time passes.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four playable modes. Also the keys of the high-score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Easy,
    Medium,
    Hard,
    Endless,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Easy, Mode::Medium, Mode::Hard, Mode::Endless];

    /// Display name, capitalized.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Endless => "Endless",
        }
    }

    /// Key used in the persisted score table.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Endless => "endless",
        }
    }

    pub fn config(&self) -> DifficultyConfig {
        match self {
            Self::Easy => DifficultyConfig {
                time_step: 0.10,
                gravity: BASE_GRAVITY * 1.2,
                pipe_spacing: 32,
                dynamic_gap_shift: false,
                endless: false,
                shrink_gap: false,
            },
            Self::Medium => DifficultyConfig {
                time_step: 0.08,
                gravity: BASE_GRAVITY * 1.45,
                pipe_spacing: 24,
                dynamic_gap_shift: false,
                endless: false,
                shrink_gap: false,
            },
            Self::Hard => DifficultyConfig {
                time_step: 0.06,
                gravity: BASE_GRAVITY * 1.6,
                pipe_spacing: 20,
                dynamic_gap_shift: true,
                endless: false,
                shrink_gap: true,
            },
            Self::Endless => DifficultyConfig {
                time_step: 0.10,
                gravity: BASE_GRAVITY * 1.2,
                pipe_spacing: 32,
                dynamic_gap_shift: false,
                endless: true,
                shrink_gap: true,
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Tuning parameters selected at menu time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    /// Seconds of simulated time per tick; also the real delay between ticks.
    pub time_step: f64,
    /// Downward acceleration in rows/sec^2.
    pub gravity: f64,
    /// Columns between consecutively spawned pipes.
    pub pipe_spacing: u16,
    pub dynamic_gap_shift: bool,
    /// Difficulty drifts with elapsed time.
    pub endless: bool,
    /// The gap narrows every `GAP_SHRINK_INTERVAL_SECONDS`.
    pub shrink_gap: bool,
}

impl DifficultyConfig {
    /// Pipe spacing after `elapsed` seconds: one column less every 10s, floored at 20.
    pub fn pipe_spacing_at(&self, elapsed: f64) -> u16 {
        let steps = (elapsed.max(0.0) / ENDLESS_SPACING_STEP_SECONDS).floor();
        let steps = steps.min(u16::MAX as f64) as u16;
        let floor = ENDLESS_MIN_PIPE_SPACING.min(self.pipe_spacing);
        self.pipe_spacing.saturating_sub(steps).max(floor)
    }

    /// Time step after `elapsed` seconds: 0.005s shorter every 15s, floored at 0.06.
    pub fn time_step_at(&self, elapsed: f64) -> f64 {
        let steps = (elapsed.max(0.0) / ENDLESS_PHYSICS_STEP_SECONDS).floor();
        let floor = ENDLESS_MIN_TIME_STEP.min(self.time_step);
        (self.time_step - ENDLESS_TIME_STEP_DECREMENT * steps).max(floor)
    }

    /// Gravity after `elapsed` seconds: 0.2 stronger every 15s, capped at 9.8*1.6.
    pub fn gravity_at(&self, elapsed: f64) -> f64 {
        let steps = (elapsed.max(0.0) / ENDLESS_PHYSICS_STEP_SECONDS).floor();
        let cap = ENDLESS_MAX_GRAVITY.max(self.gravity);
        (self.gravity + ENDLESS_GRAVITY_INCREMENT * steps).min(cap)
    }
}
