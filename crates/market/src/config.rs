//! Provider chain configuration.

use crate::adapter::adapter_for;
use cryptobot_core::{Provider, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Static per-provider settings.
///
/// Defined at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider identifier.
    pub provider: Provider,
    /// Endpoint root.
    pub base_url: String,
    /// Request ceiling enforced by the rate limiter.
    pub requests_per_minute: u32,
    /// Fallback order; lower is tried first.
    pub priority: u8,
    /// Ticker -> provider identifier overrides. Symbols not listed here
    /// use the adapter's default transform.
    #[serde(default)]
    pub symbol_overrides: HashMap<String, String>,
}

impl ProviderConfig {
    /// Default settings for a provider, sized for free API tiers.
    pub fn defaults_for(provider: Provider) -> Self {
        let (requests_per_minute, priority) = match provider {
            Provider::Binance => (10, 1),
            Provider::CoinGecko => (8, 2),
            Provider::CryptoCompare => (5, 3),
        };
        let symbol_overrides = match provider {
            Provider::CoinGecko => coingecko_overrides(),
            _ => HashMap::new(),
        };
        Self {
            provider,
            base_url: adapter_for(provider).default_base_url().to_string(),
            requests_per_minute,
            priority,
            symbol_overrides,
        }
    }

    /// Translate a ticker into this provider's identifier scheme:
    /// override table first, then the adapter's default transform.
    pub fn symbol_for(&self, symbol: &Symbol) -> String {
        if let Some(mapped) = self.symbol_overrides.get(symbol.as_str()) {
            return mapped.clone();
        }
        adapter_for(self.provider).default_symbol(symbol)
    }
}

/// CoinGecko keys prices by coin id rather than ticker.
fn coingecko_overrides() -> HashMap<String, String> {
    [
        ("BTC", "bitcoin"),
        ("ETH", "ethereum"),
        ("BNB", "binancecoin"),
        ("ADA", "cardano"),
        ("SOL", "solana"),
        ("XRP", "ripple"),
        ("DOGE", "dogecoin"),
        ("MATIC", "polygon"),
        ("DOT", "polkadot"),
        ("AVAX", "avalanche-2"),
        ("LINK", "chainlink"),
        ("UNI", "uniswap"),
        ("LTC", "litecoin"),
        ("BCH", "bitcoin-cash"),
        ("ATOM", "cosmos"),
        ("ALGO", "algorand"),
        ("VET", "vechain"),
        ("FIL", "filecoin"),
        ("TRX", "tron"),
        ("ETC", "ethereum-classic"),
        ("MANA", "decentraland"),
    ]
    .into_iter()
    .map(|(ticker, id)| (ticker.to_string(), id.to_string()))
    .collect()
}

/// Market data configuration: the fallback chain plus shared HTTP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Providers to query, in any order; the fetcher sorts by priority.
    pub providers: Vec<ProviderConfig>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            providers: Provider::all()
                .iter()
                .map(|&provider| ProviderConfig::defaults_for(provider))
                .collect(),
            request_timeout_secs: 10,
        }
    }
}

impl MarketConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Rate-limit table for constructing the limiter.
    pub fn rate_limits(&self) -> HashMap<Provider, u32> {
        self.providers
            .iter()
            .map(|config| (config.provider, config.requests_per_minute))
            .collect()
    }
}
