//! Binance 24hr ticker adapter.

use crate::adapter::ProviderAdapter;
use crate::error::ProviderError;
use cryptobot_core::{PriceQuote, Provider, Symbol};
use serde_json::Value;

/// Binance REST adapter. Primary source: quotes against the USDT pair.
pub struct BinanceAdapter;

impl ProviderAdapter for BinanceAdapter {
    fn provider(&self) -> Provider {
        Provider::Binance
    }

    fn default_base_url(&self) -> &'static str {
        "https://api.binance.com/api/v3"
    }

    fn default_symbol(&self, symbol: &Symbol) -> String {
        format!("{}USDT", symbol)
    }

    fn price_url(&self, base_url: &str, provider_symbol: &str) -> String {
        format!("{}/ticker/24hr?symbol={}", base_url, provider_symbol)
    }

    fn parse_quote(
        &self,
        symbol: &Symbol,
        _provider_symbol: &str,
        body: &Value,
    ) -> Result<PriceQuote, ProviderError> {
        // Response: {"lastPrice":"67000.50","priceChangePercent":"2.30",
        //            "highPrice":"...","lowPrice":"...","volume":"..."}
        // Binance encodes all numbers as strings.
        let price = numeric_str_field(body, "lastPrice").ok_or(ProviderError::MissingPrice)?;
        let change = numeric_str_field(body, "priceChangePercent").unwrap_or(0.0);
        let high = numeric_str_field(body, "highPrice");
        let low = numeric_str_field(body, "lowPrice");
        let volume = numeric_str_field(body, "volume");

        Ok(PriceQuote::new(symbol.clone(), price, Provider::Binance)
            .with_change_24h(change)
            .with_range_24h(low, high)
            .with_volume_24h(volume))
    }
}

fn numeric_str_field(body: &Value, field: &str) -> Option<f64> {
    body[field].as_str().and_then(|s| s.parse::<f64>().ok())
}
