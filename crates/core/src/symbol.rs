//! Ticker symbol type.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated uppercase ticker symbol (e.g. "BTC").
///
/// Construction goes through [`Symbol::parse`] so invalid user input is
/// rejected before any provider call is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(CompactString);

impl Symbol {
    /// Parse raw user input into a symbol.
    ///
    /// Trims whitespace and uppercases. Returns None for empty input or
    /// input containing non-alphanumeric characters.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(CompactString::new(trimmed.to_ascii_uppercase())))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_uppercases() {
        let symbol = Symbol::parse("btc").unwrap();
        assert_eq!(symbol.as_str(), "BTC");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let symbol = Symbol::parse("  eth \n").unwrap();
        assert_eq!(symbol.as_str(), "ETH");
    }

    #[test]
    fn test_parse_accepts_digits() {
        let symbol = Symbol::parse("1inch").unwrap();
        assert_eq!(symbol.as_str(), "1INCH");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Symbol::parse(""), None);
        assert_eq!(Symbol::parse("   "), None);
    }

    #[test]
    fn test_parse_rejects_punctuation() {
        assert_eq!(Symbol::parse("BTC/USD"), None);
        assert_eq!(Symbol::parse("BTC-USD"), None);
        assert_eq!(Symbol::parse("B T C"), None);
    }

    #[test]
    fn test_display() {
        let symbol = Symbol::parse("sol").unwrap();
        assert_eq!(format!("{}", symbol), "SOL");
    }
}
