//! Provider-specific request building and payload normalization.
//!
//! Each provider keys prices by its own identifier scheme and returns
//! its own JSON shape. Adapters translate both directions into the
//! normalized `PriceQuote`.

mod binance;
mod coingecko;
mod cryptocompare;

pub use binance::BinanceAdapter;
pub use coingecko::CoinGeckoAdapter;
pub use cryptocompare::CryptoCompareAdapter;

use crate::error::ProviderError;
use cryptobot_core::{PriceQuote, Provider, Symbol};
use serde_json::Value;

/// Provider-specific request/response handling.
///
/// All adapters share common patterns for:
/// - Translating a ticker into the provider's identifier scheme
/// - Building the price request URL
/// - Normalizing the response payload into a `PriceQuote`
pub trait ProviderAdapter: Send + Sync {
    /// Get the provider identifier.
    fn provider(&self) -> Provider;

    /// Endpoint root used when no base URL is configured.
    fn default_base_url(&self) -> &'static str;

    /// Default ticker transform for symbols without a configured
    /// override (e.g. "BTC" -> "BTCUSDT" on Binance).
    fn default_symbol(&self, symbol: &Symbol) -> String;

    /// Full price request URL for a provider-scheme symbol.
    fn price_url(&self, base_url: &str, provider_symbol: &str) -> String;

    /// Normalize a response body into a quote.
    ///
    /// A payload without the mandatory price field is an error; every
    /// optional field the provider omits stays absent in the quote.
    fn parse_quote(
        &self,
        symbol: &Symbol,
        provider_symbol: &str,
        body: &Value,
    ) -> Result<PriceQuote, ProviderError>;
}

/// Look up the adapter for a provider.
pub fn adapter_for(provider: Provider) -> &'static dyn ProviderAdapter {
    match provider {
        Provider::Binance => &BinanceAdapter,
        Provider::CoinGecko => &CoinGeckoAdapter,
        Provider::CryptoCompare => &CryptoCompareAdapter,
    }
}
