//! Immutable per-game configuration.

use super::constants::*;
use super::difficulty::{DifficultyConfig, Mode};

/// Everything the game loop needs to know up front. Built once per game and
/// passed in, never mutated; endless drift lives in `Game` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub mode: Mode,
    pub difficulty: DifficultyConfig,
    /// Velocity set by a jump (negative = upward).
    pub jump_strength: f64,
    /// Gap height at game start.
    pub initial_gap: u16,
    /// Gap height never shrinks below this.
    pub min_gap: u16,
    /// Seconds between gap shrinks.
    pub gap_shrink_interval: f64,
    /// Endless mode stops shrinking the gap after this many seconds.
    pub endless_shrink_cutoff: f64,
    /// Pause after a crash, in ticks.
    pub crash_pause_ticks: u32,
}

impl GameConfig {
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            difficulty: mode.config(),
            jump_strength: JUMP_STRENGTH,
            initial_gap: GAP_HEIGHT,
            min_gap: MIN_GAP_HEIGHT,
            gap_shrink_interval: GAP_SHRINK_INTERVAL_SECONDS,
            endless_shrink_cutoff: ENDLESS_SHRINK_CUTOFF_SECONDS,
            crash_pause_ticks: CRASH_PAUSE_TICKS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_mode(Mode::Easy)
    }
}
