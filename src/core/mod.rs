//! Core domain types for Mastermind
//!
//! This module contains the symbol alphabet and the row type with its scoring
//! rule. Nothing here touches the terminal; every rejected operation is a plain
//! `false`, never an error.

mod row;
mod symbol;

pub use row::{ROW_LEN, Row};
pub use symbol::{MAX_SYMBOL, MIN_SYMBOL, Symbol, SymbolError};
