use ascii_flappy::app::{run_session, SessionEnd};
use ascii_flappy::core::constants::LOG_FILE;
use ascii_flappy::core::SystemClock;
use ascii_flappy::high_scores::ScoreStore;
use ascii_flappy::terminal::{InterruptFlag, SignalConsole, TerminalConsole, TerminalGuard};
use ascii_flappy::utils::{logging, persistence};
use ascii_flappy::Result;
use std::process::ExitCode;
use tracing::{error, info};

/// Conventional exit status for termination by SIGINT.
const INTERRUPTED_EXIT_CODE: u8 = 130;

fn main() -> ExitCode {
    match run() {
        Ok(SessionEnd::Exit) => ExitCode::SUCCESS,
        Ok(SessionEnd::Interrupted) => ExitCode::from(INTERRUPTED_EXIT_CODE),
        Err(e) => {
            eprintln!("flappy: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<SessionEnd> {
    let data_dir = persistence::data_dir()?;
    if let Err(e) = logging::init_logging(&data_dir.join(LOG_FILE)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Check the score file before the terminal switches to raw mode
    let store = ScoreStore::in_dir(&data_dir);
    if let Err(e) = store.load() {
        error!(error = %e, "unreadable high score file");
        return Err(e);
    }

    // Signals become an interrupt key, so the guard below still restores
    let interrupt = InterruptFlag::new();
    interrupt.install_signal_handler()?;

    let _guard = TerminalGuard::enter()?;
    let mut console = SignalConsole::new(TerminalConsole::new()?, interrupt);
    let mut clock = SystemClock::new();
    let mut rng = rand::thread_rng();

    let end = run_session(&mut console, &mut clock, &mut rng, &store);
    match &end {
        Ok(end) => info!(?end, "session ended"),
        Err(e) => error!(error = %e, "session failed"),
    }
    end
}
