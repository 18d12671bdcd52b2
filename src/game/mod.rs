//! Game loop
//!
//! The state machine that turns key presses into guesses and scores them
//! against the secret, plus the two seams it talks through: a [`KeySource`]
//! for input and an [`OutputSink`] for display.

mod keys;
mod sink;
mod state;

pub use keys::{Key, KeySource, ScriptedKeys};
pub use sink::{Notification, OutputSink, RecordingSink};
pub use state::{Game, Outcome, Phase, QUIT_MESSAGE, WIN_MESSAGE, play};
