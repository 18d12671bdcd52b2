//! Formatting utilities for terminal output

use crate::core::Symbol;
use colored::{ColoredString, Colorize};

/// Width in terminal cells of one rendered symbol
pub const TILE_WIDTH: u16 = 3;

/// Format a symbol as a bold, reverse-video tile in its own color
///
/// Each symbol keeps the same color for the whole game so rows can be
/// compared at a glance: 1 grey, 2 blue, 3 green, 4 yellow, 5 red.
#[must_use]
pub fn symbol_tile(symbol: Symbol) -> ColoredString {
    let tile = format!(" {symbol} ");
    let colored = match symbol.value() {
        1 => tile.bright_black(),
        2 => tile.bright_blue(),
        3 => tile.bright_green(),
        4 => tile.bright_yellow(),
        _ => tile.bright_red(),
    };
    colored.bold().reversed()
}

/// Format the hit count printed after a complete guess
#[must_use]
pub fn hits_label(hits: usize) -> String {
    format!(" {hits}")
}

/// Format the line shown when the game ends
#[must_use]
pub fn exit_line(message: &str) -> String {
    format!("  {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_tile_plain_text() {
        let symbol = Symbol::new(3).unwrap();
        let tile = symbol_tile(symbol);
        // The underlying text is unaffected by styling
        assert_eq!(&*tile, " 3 ");
        assert_eq!(tile.chars().count(), usize::from(TILE_WIDTH));
    }

    #[test]
    fn symbol_tiles_for_whole_alphabet() {
        let tiles: Vec<String> = Symbol::ALL
            .iter()
            .map(|&s| symbol_tile(s).chars().collect())
            .collect();
        assert_eq!(tiles, vec![" 1 ", " 2 ", " 3 ", " 4 ", " 5 "]);
    }

    #[test]
    fn hits_label_format() {
        assert_eq!(hits_label(0), " 0");
        assert_eq!(hits_label(5), " 5");
    }

    #[test]
    fn exit_line_format() {
        assert_eq!(exit_line("Correct"), "  Correct");
    }
}
