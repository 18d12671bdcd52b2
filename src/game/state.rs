//! Game state machine
//!
//! One [`Game`] owns the secret row and the guess under construction. Keys are
//! fed in one at a time through [`Game::handle_key`]; every notification for
//! the display goes through an [`OutputSink`].

use super::{Key, KeySource, OutputSink};
use crate::core::{ROW_LEN, Row, Symbol};
use rand::Rng;
use std::io;
use tracing::debug;

/// Message shown when the secret is found
pub const WIN_MESSAGE: &str = "Correct";

/// Message shown when the player gives up
pub const QUIT_MESSAGE: &str = "Quitting...";

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Quit,
}

impl Outcome {
    /// Process exit status for this outcome
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Won => 0,
            Self::Quit => 1,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::Won => WIN_MESSAGE,
            Self::Quit => QUIT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Collecting keys into the current guess
    AwaitingGuess,
    /// A complete guess is being scored; never observed between keys
    RoundScored,
    Finished(Outcome),
}

/// A single Mastermind game
#[derive(Debug, Clone)]
pub struct Game {
    secret: Row,
    guess: Row,
    phase: Phase,
    rounds: usize,
}

impl Game {
    /// Start a game against a given secret
    ///
    /// The secret should be a full row; a partial secret can never be matched.
    #[must_use]
    pub fn new(secret: Row) -> Self {
        debug_assert!(secret.is_full(), "secret must be a full row");

        Self {
            secret,
            guess: Row::empty(),
            phase: Phase::AwaitingGuess,
            rounds: 0,
        }
    }

    /// Start a game against a random secret
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Row::random(rng))
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The guess being built in the current round
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Row {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Row {
        &self.secret
    }

    /// Number of guesses scored so far
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Show the first prompt
    ///
    /// Does nothing once the game has finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to write.
    pub fn start<S: OutputSink + ?Sized>(&self, sink: &mut S) -> io::Result<()> {
        if self.phase != Phase::AwaitingGuess {
            return Ok(());
        }
        debug!(rounds = self.rounds, "game started");
        sink.prompt()
    }

    /// Apply one key press and return the resulting phase
    ///
    /// Keys that do not apply (duplicate or out-of-range digits, Enter on an
    /// incomplete guess, Backspace on an empty one, anything unknown) change
    /// nothing and notify nobody. Keys after the game has finished are
    /// ignored too.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to write.
    pub fn handle_key<S: OutputSink + ?Sized>(
        &mut self,
        key: Key,
        sink: &mut S,
    ) -> io::Result<Phase> {
        if self.phase != Phase::AwaitingGuess {
            return Ok(self.phase);
        }

        match key {
            Key::Char('q') | Key::Interrupt => {
                self.finish(Outcome::Quit, sink)?;
            }
            Key::Enter => {
                if self.guess.is_full() {
                    self.phase = Phase::RoundScored;
                    self.score_round(sink)?;
                }
            }
            Key::Backspace => {
                if self.guess.remove_last() {
                    sink.erase_symbol()?;
                }
            }
            Key::Char(ch) => {
                if let Ok(symbol) = Symbol::try_from(ch)
                    && self.guess.push(symbol)
                {
                    sink.render_symbol(symbol)?;
                }
            }
            Key::Other => {}
        }

        Ok(self.phase)
    }

    fn score_round<S: OutputSink + ?Sized>(&mut self, sink: &mut S) -> io::Result<()> {
        let hits = self.secret.hits(&self.guess);
        self.rounds += 1;
        debug!(round = self.rounds, hits, "round scored");

        sink.advance_round(hits)?;

        if hits == ROW_LEN {
            self.finish(Outcome::Won, sink)
        } else {
            self.guess = Row::empty();
            self.phase = Phase::AwaitingGuess;
            sink.prompt()
        }
    }

    fn finish<S: OutputSink + ?Sized>(&mut self, outcome: Outcome, sink: &mut S) -> io::Result<()> {
        self.phase = Phase::Finished(outcome);
        debug!(?outcome, rounds = self.rounds, "game finished");
        sink.exit_message(outcome.message(), outcome.exit_code())
    }
}

/// Run a game to completion
///
/// Shows the first prompt, then reads keys until the game is won or quit.
///
/// # Errors
///
/// Returns an error if reading a key or writing to the sink fails.
///
/// # Examples
/// ```
/// use mastermind_digits::core::Row;
/// use mastermind_digits::game::{Game, Outcome, RecordingSink, ScriptedKeys, play};
///
/// let secret = Row::from_symbols(&[1, 2, 3, 4, 5]).unwrap();
/// let mut keys = ScriptedKeys::from_text("12345\r");
/// let mut sink = RecordingSink::new();
///
/// let outcome = play(&mut Game::new(secret), &mut keys, &mut sink).unwrap();
/// assert_eq!(outcome, Outcome::Won);
/// assert_eq!(sink.hit_counts(), vec![5]);
/// ```
pub fn play<K, S>(game: &mut Game, keys: &mut K, sink: &mut S) -> io::Result<Outcome>
where
    K: KeySource + ?Sized,
    S: OutputSink + ?Sized,
{
    game.start(sink)?;

    loop {
        let key = keys.next_key()?;
        if let Phase::Finished(outcome) = game.handle_key(key, sink)? {
            return Ok(outcome);
        }
    }
}
