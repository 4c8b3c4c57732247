//! Real-time driver around `Game`: input, tick, render, collision, sleep.
//!
//! Time and I/O come in through the `Clock` and `Console` traits so the loop
//! runs the same against a real terminal and a scripted test harness.

use super::config::GameConfig;
use super::game_state::{Game, TickEvent};
use crate::error::Result;
use crate::input::Key;
use crate::terminal::Console;
use crate::ui::screen::render_frame;
use rand::Rng;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Monotonic time source with a blocking sleep.
pub trait Clock {
    /// Time since an arbitrary fixed origin.
    fn now(&self) -> Duration;

    fn sleep(&mut self, duration: Duration);
}

/// Wall clock.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The bird hit a pipe.
    Crashed { score: u32 },
    /// The player pressed Ctrl-C.
    Interrupted,
}

fn seconds(secs: f64) -> Duration {
    Duration::from_secs_f64(secs.max(0.0))
}

/// Play one game to the end.
pub fn run_game<C, K, R>(
    config: GameConfig,
    console: &mut C,
    clock: &mut K,
    rng: &mut R,
) -> Result<GameOutcome>
where
    C: Console,
    K: Clock,
    R: Rng,
{
    let mut game = Game::new(config, rng);
    let start = clock.now();
    info!(mode = %config.mode, "game started");

    loop {
        let elapsed = clock.now().saturating_sub(start).as_secs_f64();

        let jump = match console.poll_key()? {
            Some(Key::Interrupt) => {
                info!(score = game.score, "game interrupted");
                return Ok(GameOutcome::Interrupted);
            }
            Some(key) => key.is_jump(),
            None => false,
        };

        if let TickEvent::Scored(passed) = game.tick(elapsed, jump, rng) {
            debug!(passed, score = game.score, "pipe passed");
        }

        console.present(&render_frame(&game))?;

        if game.check_collision() {
            clock.sleep(seconds(game.time_step * config.crash_pause_ticks as f64));
            info!(
                mode = %config.mode,
                score = game.score,
                ticks = game.tick_count,
                "bird crashed"
            );
            return Ok(GameOutcome::Crashed { score: game.score });
        }

        clock.sleep(seconds(game.time_step));
    }
}
