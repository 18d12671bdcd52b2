//! Mastermind Digits
//!
//! A terminal take on Mastermind: find the hidden order of the digits 1-5.
//! After each complete guess the game reports how many digits sit in exactly
//! the right place.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_digits::core::Row;
//!
//! let secret = Row::random(&mut rand::rng());
//! let guess = Row::from_symbols(&[1, 2, 3, 4, 5]).unwrap();
//! println!("Hits: {}", secret.hits(&guess));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Terminal output formatting
pub mod output;

// Interactive terminal front end
pub mod interactive;
