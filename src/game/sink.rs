//! Notifications the game sends to the display

use crate::core::Symbol;
use std::io;

/// Receiver of everything the game wants shown
///
/// The game only passes semantic values; colors, spacing and cursor movement
/// belong to the implementation. A sink never ends the process.
pub trait OutputSink {
    /// A symbol was added to the current guess
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn render_symbol(&mut self, symbol: Symbol) -> io::Result<()>;

    /// The last symbol of the current guess was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn erase_symbol(&mut self) -> io::Result<()>;

    /// A complete guess scored `hits`; move on to a new line
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn advance_round(&mut self, hits: usize) -> io::Result<()>;

    /// A new guess is about to be collected
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn prompt(&mut self) -> io::Result<()>;

    /// The game is over with the given message and process status
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn exit_message(&mut self, message: &str, code: u8) -> io::Result<()>;
}

/// A recorded sink notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Symbol(Symbol),
    Erase,
    Advance(usize),
    Prompt,
    Exit { message: String, code: u8 },
}

/// Sink that stores every notification in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub notifications: Vec<Notification>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit counts reported so far, one per scored round
    #[must_use]
    pub fn hit_counts(&self) -> Vec<usize> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::Advance(hits) => Some(*hits),
                _ => None,
            })
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn render_symbol(&mut self, symbol: Symbol) -> io::Result<()> {
        self.notifications.push(Notification::Symbol(symbol));
        Ok(())
    }

    fn erase_symbol(&mut self) -> io::Result<()> {
        self.notifications.push(Notification::Erase);
        Ok(())
    }

    fn advance_round(&mut self, hits: usize) -> io::Result<()> {
        self.notifications.push(Notification::Advance(hits));
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        self.notifications.push(Notification::Prompt);
        Ok(())
    }

    fn exit_message(&mut self, message: &str, code: u8) -> io::Result<()> {
        self.notifications.push(Notification::Exit {
            message: message.to_string(),
            code,
        });
        Ok(())
    }
}
