//! Key events consumed by the game

use std::collections::VecDeque;
use std::io;

/// A single key press, reduced to what the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    /// Backspace or Delete
    Backspace,
    /// Ctrl-C
    Interrupt,
    Char(char),
    /// Arrows, function keys, etc.
    Other,
}

/// Blocking source of key presses
pub trait KeySource {
    /// Wait for the next key press
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Key source replaying a fixed script
///
/// Once the script runs out, every further read fails with
/// `io::ErrorKind::UnexpectedEof`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script from typed text: `\n`/`\r` become Enter, `\x7f`/`\x08` Backspace,
    /// `\x03` Interrupt, everything else a plain character
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().map(|ch| match ch {
            '\n' | '\r' => Key::Enter,
            '\x7f' | '\x08' => Key::Backspace,
            '\x03' => Key::Interrupt,
            other => Key::Char(other),
        }))
    }

    /// Number of keys not yet read
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_keys_in_order() {
        let mut keys = ScriptedKeys::new([Key::Char('1'), Key::Enter]);
        assert_eq!(keys.remaining(), 2);
        assert_eq!(keys.next_key().unwrap(), Key::Char('1'));
        assert_eq!(keys.next_key().unwrap(), Key::Enter);
        assert_eq!(keys.remaining(), 0);
    }

    #[test]
    fn scripted_keys_exhausted() {
        let mut keys = ScriptedKeys::default();
        let err = keys.next_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn scripted_keys_from_text() {
        let keys = ScriptedKeys::from_text("12\x7f\r\x03q");
        let collected: Vec<Key> = keys.keys.into_iter().collect();
        assert_eq!(
            collected,
            vec![
                Key::Char('1'),
                Key::Char('2'),
                Key::Backspace,
                Key::Enter,
                Key::Interrupt,
                Key::Char('q'),
            ]
        );
    }
}
