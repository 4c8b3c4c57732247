//! Integration test: game loop and session flow
//!
//! Drives `run_game` and `run_session` against a scripted console and a
//! manual clock, so every frame and every sleep is observable.

use ascii_flappy::app::{run_session, SessionEnd};
use ascii_flappy::core::{run_game, Clock, GameConfig, GameOutcome, Mode};
use ascii_flappy::input::Key;
use ascii_flappy::terminal::{Console, InterruptFlag, SignalConsole};
use ascii_flappy::{GameError, ScoreStore, BIRD_X, SCREEN_WIDTH};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Console that records frames and replays scripted keys.
#[derive(Default)]
struct ScriptedConsole {
    /// One entry per non-blocking poll; empty means no key pending.
    polls: VecDeque<Option<Key>>,
    /// Keys returned by blocking waits; runs out into Ctrl-C.
    waits: VecDeque<Key>,
    frames: Vec<Vec<String>>,
}

impl ScriptedConsole {
    fn with_waits(keys: &[Key]) -> Self {
        Self {
            waits: keys.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn count_frames_containing(&self, text: &str) -> usize {
        self.frames
            .iter()
            .filter(|frame| frame.iter().any(|line| line.contains(text)))
            .count()
    }
}

impl Console for ScriptedConsole {
    fn present(&mut self, lines: &[String]) -> io::Result<()> {
        self.frames.push(lines.to_vec());
        Ok(())
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.polls.pop_front().flatten())
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        Ok(self.waits.pop_front().unwrap_or(Key::Interrupt))
    }
}

/// Clock that only moves when slept on.
#[derive(Default)]
struct ManualClock {
    now: Duration,
    sleeps: Vec<Duration>,
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
        self.sleeps.push(duration);
    }
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

fn temp_store(name: &str) -> (ScoreStore, PathBuf) {
    let dir = std::env::temp_dir().join(format!(
        "ascii-flappy-loop-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    (ScoreStore::in_dir(&dir), dir)
}

fn glyph_at(frame: &[String], row: usize, col: usize) -> char {
    frame[row].chars().nth(col).unwrap()
}

/// Ticks until the first pipe, spawned at the right edge, reaches the bird column.
const TICKS_TO_FIRST_PIPE: usize = (SCREEN_WIDTH - BIRD_X) as usize;

/// Frames drawn by the intro: one per loading step plus the prompt.
const INTRO_FRAMES: usize = 29;

// =============================================================================
// run_game
// =============================================================================

#[test]
fn test_falling_bird_crashes_into_first_pipe() {
    let mut console = ScriptedConsole::default();
    let mut clock = ManualClock::default();

    let outcome = run_game(
        GameConfig::for_mode(Mode::Medium),
        &mut console,
        &mut clock,
        &mut rng(),
    )
    .unwrap();

    assert_eq!(outcome, GameOutcome::Crashed { score: 0 });
    assert_eq!(console.frames.len(), TICKS_TO_FIRST_PIPE);

    // the bird lies on the bottom row, drawn over the pipe it hit
    let last = console.frames.last().unwrap();
    assert_eq!(glyph_at(last, 18, BIRD_X as usize), '*');
    assert!(last[1].ends_with("# SCORE: 0  #"));
}

#[test]
fn test_tick_delay_and_crash_pause() {
    let mut console = ScriptedConsole::default();
    let mut clock = ManualClock::default();

    run_game(
        GameConfig::for_mode(Mode::Medium),
        &mut console,
        &mut clock,
        &mut rng(),
    )
    .unwrap();

    assert_eq!(clock.sleeps.len(), TICKS_TO_FIRST_PIPE);
    let (pause, ticks) = clock.sleeps.split_last().unwrap();
    for sleep in ticks {
        assert!((sleep.as_secs_f64() - 0.08).abs() < 1e-6);
    }
    assert!((pause.as_secs_f64() - 0.8).abs() < 1e-6);
}

#[test]
fn test_interrupt_ends_game_immediately() {
    let mut console = ScriptedConsole::default();
    console.polls.push_back(Some(Key::Interrupt));
    let mut clock = ManualClock::default();

    let outcome = run_game(
        GameConfig::for_mode(Mode::Easy),
        &mut console,
        &mut clock,
        &mut rng(),
    )
    .unwrap();

    assert_eq!(outcome, GameOutcome::Interrupted);
    assert!(console.frames.is_empty());
}

#[test]
fn test_jump_lifts_bird_next_tick() {
    let mut console = ScriptedConsole::default();
    console.polls.push_back(Some(Key::Char(' ')));
    let mut clock = ManualClock::default();

    run_game(
        GameConfig::for_mode(Mode::Medium),
        &mut console,
        &mut clock,
        &mut rng(),
    )
    .unwrap();

    // tick 1: y = 10.09 (jump only changes velocity)
    assert_eq!(glyph_at(&console.frames[0], 10, BIRD_X as usize), '*');
    // tick 2: velocity -9.5 + 1.1368, y ~= 9.42
    assert_eq!(glyph_at(&console.frames[1], 9, BIRD_X as usize), '*');
}

#[test]
fn test_other_keys_do_not_jump() {
    let mut console = ScriptedConsole::default();
    console.polls.push_back(Some(Key::Char('x')));
    console.polls.push_back(Some(Key::Other));
    let mut clock = ManualClock::default();

    run_game(
        GameConfig::for_mode(Mode::Medium),
        &mut console,
        &mut clock,
        &mut rng(),
    )
    .unwrap();

    // without a jump the bird keeps falling: 10.09, then 10.27
    assert_eq!(glyph_at(&console.frames[1], 10, BIRD_X as usize), '*');
}

#[test]
fn test_signal_mid_game_interrupts() {
    let interrupt = InterruptFlag::new();
    let mut console = SignalConsole::new(ScriptedConsole::default(), interrupt.clone());
    let mut clock = ManualClock::default();
    let mut rng = rng();

    interrupt.raise();
    let outcome = run_game(
        GameConfig::for_mode(Mode::Hard),
        &mut console,
        &mut clock,
        &mut rng,
    )
    .unwrap();

    assert_eq!(outcome, GameOutcome::Interrupted);
    assert!(clock.sleeps.is_empty());
}

// =============================================================================
// run_session
// =============================================================================

#[test]
fn test_session_play_then_exit() {
    let (store, dir) = temp_store("play-exit");
    let mut console =
        ScriptedConsole::with_waits(&[Key::Char('x'), Key::Char('9'), Key::Char('2'), Key::Char('3')]);
    let mut clock = ManualClock::default();

    let end = run_session(&mut console, &mut clock, &mut rng(), &store).unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(
        console.frames.len(),
        INTRO_FRAMES + 1 + TICKS_TO_FIRST_PIPE + 1
    );
    assert_eq!(console.count_frames_containing("##### GAME OVER #####"), 1);
    assert_eq!(console.count_frames_containing("Flappy Bird Main Menu"), 1);
    assert_eq!(store.load().unwrap().get(Mode::Medium), 0);
    assert!(store.path().exists());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_session_exit_from_menu() {
    let (store, dir) = temp_store("menu-exit");
    let mut console = ScriptedConsole::with_waits(&[Key::Char(' '), Key::Char('5')]);
    let mut clock = ManualClock::default();

    let end = run_session(&mut console, &mut clock, &mut rng(), &store).unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(console.frames.len(), INTRO_FRAMES + 1);
    assert!(!store.path().exists());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_session_retry_and_return_to_menu() {
    let (store, dir) = temp_store("retry");
    let mut console = ScriptedConsole::with_waits(&[
        Key::Char('x'),
        Key::Char('1'), // easy
        Key::Char('1'), // play again
        Key::Char('2'), // back to menu
        Key::Char('5'), // exit
    ]);
    let mut clock = ManualClock::default();

    let end = run_session(&mut console, &mut clock, &mut rng(), &store).unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(console.count_frames_containing("##### GAME OVER #####"), 2);
    assert_eq!(console.count_frames_containing("Flappy Bird Main Menu"), 2);
    assert_eq!(
        console.frames.len(),
        INTRO_FRAMES + 1 + 2 * (TICKS_TO_FIRST_PIPE + 1) + 1
    );

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_session_interrupt_in_intro() {
    let (store, dir) = temp_store("intro-interrupt");
    let mut console = ScriptedConsole::default();
    console.polls.push_back(Some(Key::Interrupt));
    let mut clock = ManualClock::default();

    let end = run_session(&mut console, &mut clock, &mut rng(), &store).unwrap();

    assert_eq!(end, SessionEnd::Interrupted);
    assert!(console.frames.is_empty());
    assert!(clock.sleeps.is_empty());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_session_intro_timing() {
    let (store, dir) = temp_store("intro-timing");
    let mut console = ScriptedConsole::with_waits(&[Key::Char('x'), Key::Char('5')]);
    let mut clock = ManualClock::default();

    run_session(&mut console, &mut clock, &mut rng(), &store).unwrap();

    assert_eq!(clock.sleeps.len(), INTRO_FRAMES - 1);
    assert!(clock.sleeps.iter().all(|d| *d == Duration::from_millis(100)));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_session_interrupt_on_menu() {
    let (store, dir) = temp_store("menu-interrupt");
    let mut console = ScriptedConsole::with_waits(&[Key::Char('x'), Key::Interrupt]);
    let mut clock = ManualClock::default();

    let end = run_session(&mut console, &mut clock, &mut rng(), &store).unwrap();
    assert_eq!(end, SessionEnd::Interrupted);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_session_fails_fast_on_corrupt_scores() {
    let (store, dir) = temp_store("corrupt");
    fs::create_dir_all(&dir).unwrap();
    fs::write(store.path(), "easy=3").unwrap();

    let mut console = ScriptedConsole::with_waits(&[Key::Char('x'), Key::Char('1')]);
    let mut clock = ManualClock::default();

    let result = run_session(&mut console, &mut clock, &mut rng(), &store);
    assert!(matches!(result, Err(GameError::CorruptFile { .. })));
    // the file is left untouched
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "easy=3");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_session_signal_ends_without_saving() {
    let (store, dir) = temp_store("menu-signal");
    let interrupt = InterruptFlag::new();
    // the scripted keys would start a game; the raised flag wins
    let inner = ScriptedConsole::with_waits(&[Key::Char('x'), Key::Char('1')]);
    let mut console = SignalConsole::new(inner, interrupt.clone());
    let mut clock = ManualClock::default();

    interrupt.raise();
    let end = run_session(&mut console, &mut clock, &mut rng(), &store).unwrap();

    assert_eq!(end, SessionEnd::Interrupted);
    assert!(!store.path().exists());

    fs::remove_dir_all(dir).ok();
}
