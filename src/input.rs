//! Keyboard input: mapping terminal key events to game keys and menu choices.

use crate::core::difficulty::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl-C. Raw mode swallows SIGINT, so it arrives as a key.
    Interrupt,
    Other,
}

impl Key {
    pub fn is_jump(&self) -> bool {
        *self == Key::Char(' ')
    }
}

pub fn map_key(event: KeyEvent) -> Key {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Mode),
    Exit,
}

impl MenuChoice {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('1') => Some(Self::Play(Mode::Easy)),
            Key::Char('2') => Some(Self::Play(Mode::Medium)),
            Key::Char('3') => Some(Self::Play(Mode::Hard)),
            Key::Char('4') => Some(Self::Play(Mode::Endless)),
            Key::Char('5') => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Game-over screen selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    PlayAgain,
    Menu,
    Exit,
}

impl GameOverChoice {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('1') => Some(Self::PlayAgain),
            Key::Char('2') => Some(Self::Menu),
            Key::Char('3') => Some(Self::Exit),
            _ => None,
        }
    }
}
