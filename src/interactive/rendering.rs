//! Inline terminal rendering
//!
//! Draws the board directly in the scrollback, one row per guess:
//!
//! ```text
//!   1  2  3  4  5  1
//!   5  1  2  4  3  2
//! >  2  3
//! ```
//!
//! The terminal is in raw mode while playing, so every line ends in `\r\n`.

use crate::core::Symbol;
use crate::game::OutputSink;
use crate::output::{TILE_WIDTH, exit_line, hits_label, symbol_tile};
use crossterm::{
    cursor::{MoveLeft, MoveToColumn},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

const PROMPT: &str = "> ";
const NEWLINE: &str = "\r\n";

/// Output sink writing styled symbols to a terminal
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn render_symbol(&mut self, symbol: Symbol) -> io::Result<()> {
        queue!(self.out, Print(symbol_tile(symbol)))?;
        self.out.flush()
    }

    fn erase_symbol(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            MoveLeft(TILE_WIDTH),
            Print(" ".repeat(usize::from(TILE_WIDTH))),
            MoveLeft(TILE_WIDTH)
        )?;
        self.out.flush()
    }

    fn advance_round(&mut self, hits: usize) -> io::Result<()> {
        // Blank the prompt marker so only the active row shows '>'
        queue!(
            self.out,
            Print(hits_label(hits)),
            MoveToColumn(0),
            Print(" "),
            Print(NEWLINE)
        )?;
        self.out.flush()
    }

    fn prompt(&mut self) -> io::Result<()> {
        queue!(self.out, Print(PROMPT))?;
        self.out.flush()
    }

    fn exit_message(&mut self, message: &str, _code: u8) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(exit_line(message)),
            Print(NEWLINE)
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut TerminalSink<Vec<u8>>) -> io::Result<()>) -> String {
        let mut sink = TerminalSink::new(Vec::new());
        f(&mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn prompt_text() {
        assert_eq!(rendered(OutputSink::prompt), "> ");
    }

    #[test]
    fn symbol_contains_digit() {
        let out = rendered(|s| s.render_symbol(Symbol::new(4).unwrap()));
        assert!(out.contains(" 4 "), "got {out:?}");
    }

    #[test]
    fn erase_blanks_one_tile() {
        let out = rendered(OutputSink::erase_symbol);
        assert!(out.contains("   "));
        assert!(out.starts_with('\x1b'));
        assert!(out.ends_with('D'), "should finish by moving left: {out:?}");
    }

    #[test]
    fn advance_prints_hits_and_newline() {
        let out = rendered(|s| s.advance_round(3));
        assert!(out.starts_with(" 3"));
        assert!(out.ends_with(" \r\n"));
    }

    #[test]
    fn exit_message_on_own_line() {
        let out = rendered(|s| s.exit_message("Correct", 0));
        assert!(out.ends_with("  Correct\r\n"));
    }
}
