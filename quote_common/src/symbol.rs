//! Ticker symbols accepted by the analyzer.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::QuoteError;

/// Longest accepted ticker.
pub const MAX_SYMBOL_LEN: usize = 5;

/// Validated ticker symbol: one to five ASCII uppercase letters.
///
/// The input is neither trimmed nor case-folded, so [`Symbol::as_str`] always
/// returns exactly what was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Parses `input`, failing with [`QuoteError::InvalidSymbol`] if it is empty,
    /// longer than [`MAX_SYMBOL_LEN`], or contains anything but `A`-`Z`.
    pub fn parse(input: &str) -> Result<Self, QuoteError> {
        let valid = !input.is_empty()
            && input.len() <= MAX_SYMBOL_LEN
            && input.bytes().all(|b| b.is_ascii_uppercase());

        if !valid {
            return Err(QuoteError::InvalidSymbol(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    /// The symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = QuoteError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
