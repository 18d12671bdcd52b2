//! Interactive terminal front end
//!
//! Crossterm-backed implementations of the game's input and output seams.

pub mod input;
pub mod rendering;

pub use input::{RawModeGuard, TerminalKeys, map_key_event};
pub use rendering::TerminalSink;
