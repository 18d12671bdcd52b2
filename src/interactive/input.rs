//! Keyboard input from a raw-mode terminal

use crate::game::{Key, KeySource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Keeps the terminal in raw mode until dropped
#[derive(Debug)]
pub struct RawModeGuard(());

impl RawModeGuard {
    /// Switch the terminal to raw mode
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be put into raw mode.
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Nothing useful to do if restoring fails while unwinding
        let _ = disable_raw_mode();
    }
}

/// Key source reading single key presses from the terminal
///
/// Raw mode is active for as long as this value lives, so keys arrive without
/// waiting for a newline and Ctrl-C arrives as a key instead of a signal.
#[derive(Debug)]
pub struct TerminalKeys {
    _raw: RawModeGuard,
}

impl TerminalKeys {
    /// Put the terminal in raw mode and start reading keys
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be put into raw mode.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            _raw: RawModeGuard::enable()?,
        })
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()?
                && let Some(key) = map_key_event(key)
            {
                return Ok(key);
            }
        }
    }
}

/// Translate a crossterm key event
///
/// Returns `None` for release and repeat events so that one physical press
/// yields exactly one key (Windows reports both press and release).
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    Some(match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace | KeyCode::Delete => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    })
}
