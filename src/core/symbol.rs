//! Mastermind symbol representation
//!
//! The alphabet is the five digits 1-5. Every value held by a [`Symbol`] is
//! guaranteed to lie in that range.

use std::fmt;

/// Smallest valid symbol value
pub const MIN_SYMBOL: u8 = 1;

/// Largest valid symbol value (also the alphabet size)
pub const MAX_SYMBOL: u8 = 5;

/// A single digit in the closed range 1-5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

/// Error type for values outside the alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    OutOfRange(i32),
    NotADigit(char),
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => {
                write!(
                    f,
                    "Symbol must be between {MIN_SYMBOL} and {MAX_SYMBOL}, got {value}"
                )
            }
            Self::NotADigit(ch) => write!(f, "Symbol must be a digit, got {ch:?}"),
        }
    }
}

impl std::error::Error for SymbolError {}

impl Symbol {
    /// Every symbol of the alphabet, in ascending order
    pub const ALL: [Self; 5] = [Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// Create a symbol from an integer
    ///
    /// # Errors
    /// Returns `SymbolError::OutOfRange` if `value` is not in 1-5.
    ///
    /// # Examples
    /// ```
    /// use mastermind_digits::core::Symbol;
    ///
    /// assert_eq!(Symbol::new(3).unwrap().value(), 3);
    /// assert!(Symbol::new(0).is_err());
    /// assert!(Symbol::new(6).is_err());
    /// ```
    pub fn new(value: i32) -> Result<Self, SymbolError> {
        match u8::try_from(value) {
            Ok(v) if (MIN_SYMBOL..=MAX_SYMBOL).contains(&v) => Ok(Self(v)),
            _ => Err(SymbolError::OutOfRange(value)),
        }
    }

    /// Get the raw value (1-5)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position of this symbol in the alphabet
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - MIN_SYMBOL) as usize
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    /// Parse a typed key such as `'3'`
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .and_then(|digit| i32::try_from(digit).ok())
            .map_or(Err(SymbolError::NotADigit(ch)), Self::new)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_creation_valid() {
        for value in 1..=5 {
            let symbol = Symbol::new(value).unwrap();
            assert_eq!(i32::from(symbol.value()), value);
        }
    }

    #[test]
    fn symbol_creation_out_of_range() {
        assert_eq!(Symbol::new(0), Err(SymbolError::OutOfRange(0)));
        assert_eq!(Symbol::new(6), Err(SymbolError::OutOfRange(6)));
        assert_eq!(Symbol::new(-1), Err(SymbolError::OutOfRange(-1)));
        assert_eq!(Symbol::new(256), Err(SymbolError::OutOfRange(256)));
    }

    #[test]
    fn symbol_from_char() {
        assert_eq!(Symbol::try_from('1'), Symbol::new(1));
        assert_eq!(Symbol::try_from('5'), Symbol::new(5));
        assert_eq!(Symbol::try_from('0'), Err(SymbolError::OutOfRange(0)));
        assert_eq!(Symbol::try_from('9'), Err(SymbolError::OutOfRange(9)));
        assert_eq!(Symbol::try_from('q'), Err(SymbolError::NotADigit('q')));
    }

    #[test]
    fn symbol_index() {
        let indices: Vec<usize> = Symbol::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn symbol_display() {
        assert_eq!(format!("{}", Symbol::new(4).unwrap()), "4");
    }

    #[test]
    fn symbol_error_display() {
        assert_eq!(
            SymbolError::OutOfRange(7).to_string(),
            "Symbol must be between 1 and 5, got 7"
        );
        assert_eq!(
            SymbolError::NotADigit('x').to_string(),
            "Symbol must be a digit, got 'x'"
        );
    }
}
