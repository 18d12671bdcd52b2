//! Mastermind row representation
//!
//! A Row is an ordered, duplicate-free sequence of at most five symbols. The
//! secret is a full random row; guesses are built one symbol at a time.

use super::Symbol;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Number of positions in a row
pub const ROW_LEN: usize = 5;

/// An ordered row of distinct symbols with membership tracking
///
/// `used` always holds exactly the symbols present in `symbols`, so duplicate
/// checks never scan the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    symbols: Vec<Symbol>,
    used: FxHashSet<Symbol>,
}

impl Row {
    /// Create an empty row, ready to collect a guess
    #[must_use]
    pub fn empty() -> Self {
        Self {
            symbols: Vec::with_capacity(ROW_LEN),
            used: FxHashSet::default(),
        }
    }

    /// Create a full row holding a uniformly random permutation of 1-5
    ///
    /// # Examples
    /// ```
    /// use mastermind_digits::core::Row;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let secret = Row::random(&mut StdRng::seed_from_u64(42));
    /// assert!(secret.is_full());
    /// ```
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = Symbol::ALL;
        symbols.shuffle(rng);

        Self {
            symbols: symbols.to_vec(),
            used: symbols.into_iter().collect(),
        }
    }

    /// Build a row by appending each value in order
    ///
    /// Returns `None` if any value would be rejected by [`Row::append`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_digits::core::Row;
    ///
    /// assert!(Row::from_symbols(&[1, 2, 3, 4, 5]).is_some());
    /// assert!(Row::from_symbols(&[1, 1]).is_none());
    /// ```
    #[must_use]
    pub fn from_symbols(values: &[i32]) -> Option<Self> {
        let mut row = Self::empty();
        values.iter().all(|&value| row.append(value)).then_some(row)
    }

    /// Try to add a symbol to the end of the row
    ///
    /// Returns `false` and leaves the row untouched if the value is outside
    /// 1-5, the row is already full, or the symbol is already used.
    pub fn append(&mut self, value: i32) -> bool {
        Symbol::new(value).is_ok_and(|symbol| self.push(symbol))
    }

    /// Try to add an already validated symbol to the end of the row
    pub fn push(&mut self, symbol: Symbol) -> bool {
        if self.is_full() || !self.used.insert(symbol) {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    /// Try to remove the last symbol, freeing it for reuse
    ///
    /// Returns `false` if the row is empty.
    pub fn remove_last(&mut self) -> bool {
        match self.symbols.pop() {
            Some(symbol) => {
                self.used.remove(&symbol);
                true
            }
            None => false,
        }
    }

    /// Number of symbols currently in the row
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.symbols.len() == ROW_LEN
    }

    /// Check whether a symbol is already placed in this row
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.used.contains(&symbol)
    }

    /// Get the symbols in position order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Count the positions where both rows hold the same symbol
    ///
    /// Only exact position matches are counted; a symbol present elsewhere in
    /// the other row does not score. Both rows must be full.
    ///
    /// # Examples
    /// ```
    /// use mastermind_digits::core::Row;
    ///
    /// let secret = Row::from_symbols(&[1, 2, 3, 4, 5]).unwrap();
    /// let guess = Row::from_symbols(&[2, 1, 3, 5, 4]).unwrap();
    /// assert_eq!(secret.hits(&guess), 1);
    /// ```
    #[must_use]
    pub fn hits(&self, other: &Self) -> usize {
        debug_assert!(
            self.is_full() && other.is_full(),
            "hits requires two full rows"
        );

        self.symbols
            .iter()
            .zip(&other.symbols)
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
