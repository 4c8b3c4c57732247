//! Interactive session: intro, main menu, games with retries, game over.

use crate::core::config::GameConfig;
use crate::core::difficulty::Mode;
use crate::core::game_loop::{run_game, Clock, GameOutcome};
use crate::error::Result;
use crate::high_scores::ScoreStore;
use crate::input::{GameOverChoice, Key, MenuChoice};
use crate::terminal::Console;
use crate::ui::intro::{intro_frame, step_delay, LOADING_STEPS};
use crate::ui::menu::{game_over_lines, main_menu_lines};
use rand::Rng;
use tracing::info;

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player chose "Exit".
    Exit,
    /// The player pressed Ctrl-C.
    Interrupted,
}

/// Where to go after leaving a mode's retry loop.
enum AfterGames {
    Menu,
    End(SessionEnd),
}

/// Block until a key maps to a choice. `None` means the player interrupted.
fn wait_for_choice<C, T>(console: &mut C, parse: impl Fn(Key) -> Option<T>) -> Result<Option<T>>
where
    C: Console,
{
    loop {
        let key = console.wait_key()?;
        if key == Key::Interrupt {
            return Ok(None);
        }
        if let Some(choice) = parse(key) {
            return Ok(Some(choice));
        }
    }
}

/// Banner, loading bar, then wait for any key. Returns false on interrupt.
pub fn show_intro<C: Console, K: Clock>(console: &mut C, clock: &mut K) -> Result<bool> {
    for step in 1..=LOADING_STEPS {
        if console.poll_key()? == Some(Key::Interrupt) {
            return Ok(false);
        }
        console.present(&intro_frame(step, false))?;
        clock.sleep(step_delay());
    }
    console.present(&intro_frame(LOADING_STEPS, true))?;
    Ok(console.wait_key()? != Key::Interrupt)
}

/// Play `mode` until the player leaves the game-over screen.
fn play_mode<C, K, R>(
    mode: Mode,
    console: &mut C,
    clock: &mut K,
    rng: &mut R,
    store: &ScoreStore,
) -> Result<AfterGames>
where
    C: Console,
    K: Clock,
    R: Rng,
{
    loop {
        let score = match run_game(GameConfig::for_mode(mode), console, clock, rng)? {
            GameOutcome::Crashed { score } => score,
            GameOutcome::Interrupted => return Ok(AfterGames::End(SessionEnd::Interrupted)),
        };

        let scores = store.save(score, mode)?;
        console.present(&game_over_lines(score, mode, scores.get(mode)))?;

        match wait_for_choice(console, GameOverChoice::from_key)? {
            Some(GameOverChoice::PlayAgain) => continue,
            Some(GameOverChoice::Menu) => return Ok(AfterGames::Menu),
            Some(GameOverChoice::Exit) => return Ok(AfterGames::End(SessionEnd::Exit)),
            None => return Ok(AfterGames::End(SessionEnd::Interrupted)),
        }
    }
}

/// Run the whole interactive session.
pub fn run_session<C, K, R>(
    console: &mut C,
    clock: &mut K,
    rng: &mut R,
    store: &ScoreStore,
) -> Result<SessionEnd>
where
    C: Console,
    K: Clock,
    R: Rng,
{
    info!(scores = %store.path().display(), "session started");

    if !show_intro(console, clock)? {
        return Ok(SessionEnd::Interrupted);
    }

    loop {
        let best = store.best_overall()?;
        console.present(&main_menu_lines(best))?;

        let mode = match wait_for_choice(console, MenuChoice::from_key)? {
            Some(MenuChoice::Play(mode)) => mode,
            Some(MenuChoice::Exit) => return Ok(SessionEnd::Exit),
            None => return Ok(SessionEnd::Interrupted),
        };

        match play_mode(mode, console, clock, rng, store)? {
            AfterGames::Menu => continue,
            AfterGames::End(end) => return Ok(end),
        }
    }
}
