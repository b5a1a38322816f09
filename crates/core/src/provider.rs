//! Price provider identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream market-data provider.
///
/// The fallback chain queries these in priority order. Only providers
/// the bot actually calls are modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Provider {
    Binance = 1,
    CoinGecko = 2,
    CryptoCompare = 3,
}

impl Provider {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Provider::Binance),
            2 => Some(Provider::CoinGecko),
            3 => Some(Provider::CryptoCompare),
            _ => None,
        }
    }

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Wire name, used as the `source` identifier of a quote.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Binance => "binance",
            Provider::CoinGecko => "coingecko",
            Provider::CryptoCompare => "cryptocompare",
        }
    }

    /// Human-readable name for chat replies.
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Binance => "Binance",
            Provider::CoinGecko => "CoinGecko",
            Provider::CryptoCompare => "CryptoCompare",
        }
    }

    pub fn all() -> &'static [Provider] {
        &[
            Provider::Binance,
            Provider::CoinGecko,
            Provider::CryptoCompare,
        ]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
