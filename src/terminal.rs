//! Terminal plumbing: the `Console` contract, its ratatui/crossterm
//! implementation, the raw-mode guard and signal handling.

use crate::input::{map_key, Key};
use crate::ui::draw_lines;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How often a blocking wait rechecks the interrupt flag.
const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What the game needs from a text console.
pub trait Console {
    /// Clear the screen and print `lines` top to bottom.
    fn present(&mut self, lines: &[String]) -> io::Result<()>;

    /// Return a pending key press without blocking.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;

    /// Block until a key is pressed.
    fn wait_key(&mut self) -> io::Result<Key>;
}

/// Raw mode, alternate screen and hidden cursor, restored on drop.
///
/// Construct once at startup and keep alive for the whole session.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on any early return restores through Drop.
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        install_panic_hook();
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// Restore the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

/// `Console` backed by a ratatui terminal on stdout.
pub struct TerminalConsole {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalConsole {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self { terminal })
    }
}

impl Console for TerminalConsole {
    fn present(&mut self, lines: &[String]) -> io::Result<()> {
        self.terminal.draw(|frame| draw_lines(frame, lines))?;
        Ok(())
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        if event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(Some(map_key(key_event)));
                }
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(map_key(key_event));
                }
            }
        }
    }
}

/// Set when SIGINT, SIGTERM or SIGHUP arrives.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Route termination signals into this flag instead of the default
    /// action, which would kill the process with the terminal still raw.
    /// Can be installed once per process.
    pub fn install_signal_handler(&self) -> Result<(), ctrlc::Error> {
        let flag = self.clone();
        ctrlc::set_handler(move || flag.raise())
    }
}

/// Wraps a console so a raised `InterruptFlag` reads as `Key::Interrupt`.
///
/// The session then unwinds through its normal path and `TerminalGuard`
/// restores the terminal on drop.
pub struct SignalConsole<C> {
    inner: C,
    interrupt: InterruptFlag,
}

impl<C: Console> SignalConsole<C> {
    pub fn new(inner: C, interrupt: InterruptFlag) -> Self {
        Self { inner, interrupt }
    }
}

impl<C: Console> Console for SignalConsole<C> {
    fn present(&mut self, lines: &[String]) -> io::Result<()> {
        self.inner.present(lines)
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        if self.interrupt.is_raised() {
            return Ok(Some(Key::Interrupt));
        }
        self.inner.poll_key()
    }

    // Never blocks on the inner console, so a signal during a menu is seen.
    fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = self.poll_key()? {
                return Ok(key);
            }
            thread::sleep(SIGNAL_POLL_INTERVAL);
        }
    }
}
