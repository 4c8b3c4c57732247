//! Core game state and logic.

pub mod config;
pub mod constants;
pub mod difficulty;
pub mod game_loop;
pub mod game_state;
pub mod pipe;

pub use config::GameConfig;
pub use difficulty::{DifficultyConfig, Mode};
pub use game_loop::{run_game, Clock, GameOutcome, SystemClock};
pub use game_state::{Game, TickEvent};
pub use pipe::{Pipe, PipeColumn};
