//! Terminal output formatting
//!
//! Styling helpers shared by the terminal renderer.

pub mod formatters;

pub use formatters::{TILE_WIDTH, exit_line, hits_label, symbol_tile};
