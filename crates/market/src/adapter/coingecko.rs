//! CoinGecko simple-price adapter.

use crate::adapter::ProviderAdapter;
use crate::error::ProviderError;
use cryptobot_core::{PriceQuote, Provider, Symbol};
use serde_json::Value;

/// CoinGecko REST adapter. Reliable fallback; keyed by coin id rather
/// than ticker, so most symbols come in through the override table.
pub struct CoinGeckoAdapter;

impl ProviderAdapter for CoinGeckoAdapter {
    fn provider(&self) -> Provider {
        Provider::CoinGecko
    }

    fn default_base_url(&self) -> &'static str {
        "https://api.coingecko.com/api/v3"
    }

    fn default_symbol(&self, symbol: &Symbol) -> String {
        symbol.as_str().to_ascii_lowercase()
    }

    fn price_url(&self, base_url: &str, provider_symbol: &str) -> String {
        format!(
            "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true&include_24hr_vol=true",
            base_url, provider_symbol
        )
    }

    fn parse_quote(
        &self,
        symbol: &Symbol,
        provider_symbol: &str,
        body: &Value,
    ) -> Result<PriceQuote, ProviderError> {
        // Response: {"bitcoin":{"usd":67000.5,"usd_24h_change":2.3,"usd_24h_vol":...}}
        // An unknown id yields an empty object, not an HTTP error.
        let coin = body
            .get(provider_symbol)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ProviderError::UnknownSymbol(provider_symbol.to_string()))?;

        let price = coin["usd"].as_f64().ok_or(ProviderError::MissingPrice)?;
        let change = coin["usd_24h_change"].as_f64().unwrap_or(0.0);
        let volume = coin["usd_24h_vol"].as_f64();

        // CoinGecko's simple endpoint carries no 24h range.
        Ok(PriceQuote::new(symbol.clone(), price, Provider::CoinGecko)
            .with_change_24h(change)
            .with_volume_24h(volume))
    }
}
