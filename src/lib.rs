//! Flappy - terminal Flappy Bird library
//!
//! This module exposes the game logic for testing and for the binary.

pub mod app;
pub mod core;
pub mod error;
pub mod high_scores;
pub mod input;
pub mod terminal;
pub mod ui;
pub mod utils;

pub use crate::core::constants::*;
pub use crate::core::{Game, GameConfig, GameOutcome, Mode, Pipe};
pub use error::{GameError, Result};
pub use high_scores::{HighScores, ScoreStore};
