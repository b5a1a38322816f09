//! CryptoCompare pricemultifull adapter.

use crate::adapter::ProviderAdapter;
use crate::error::ProviderError;
use cryptobot_core::{PriceQuote, Provider, Symbol};
use serde_json::Value;

/// CryptoCompare REST adapter. Last-resort fallback; keyed directly by
/// the uppercase ticker.
pub struct CryptoCompareAdapter;

impl ProviderAdapter for CryptoCompareAdapter {
    fn provider(&self) -> Provider {
        Provider::CryptoCompare
    }

    fn default_base_url(&self) -> &'static str {
        "https://min-api.cryptocompare.com/data"
    }

    fn default_symbol(&self, symbol: &Symbol) -> String {
        symbol.as_str().to_string()
    }

    fn price_url(&self, base_url: &str, provider_symbol: &str) -> String {
        format!("{}/pricemultifull?fsyms={}&tsyms=USD", base_url, provider_symbol)
    }

    fn parse_quote(
        &self,
        symbol: &Symbol,
        provider_symbol: &str,
        body: &Value,
    ) -> Result<PriceQuote, ProviderError> {
        // Response: {"RAW":{"BTC":{"USD":{"PRICE":67000.5,"CHANGEPCT24HOUR":2.3,
        //            "HIGH24HOUR":...,"LOW24HOUR":...,"VOLUME24HOUR":...}}}}
        // Unknown symbols come back with a "Response":"Error" body and no RAW entry.
        let raw = &body["RAW"][provider_symbol]["USD"];
        if raw.is_null() {
            return Err(ProviderError::UnknownSymbol(provider_symbol.to_string()));
        }

        let price = raw["PRICE"].as_f64().ok_or(ProviderError::MissingPrice)?;
        let change = raw["CHANGEPCT24HOUR"].as_f64().unwrap_or(0.0);
        let high = raw["HIGH24HOUR"].as_f64();
        let low = raw["LOW24HOUR"].as_f64();
        let volume = raw["VOLUME24HOUR"].as_f64();

        Ok(PriceQuote::new(symbol.clone(), price, Provider::CryptoCompare)
            .with_change_24h(change)
            .with_range_24h(low, high)
            .with_volume_24h(volume))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn eth() -> Symbol {
        Symbol::parse("ETH").unwrap()
    }

    #[test]
    fn test_default_symbol_is_raw_ticker() {
        assert_eq!(CryptoCompareAdapter.default_symbol(&eth()), "ETH");
    }

    #[test]
    fn test_price_url() {
        let url = CryptoCompareAdapter.price_url("https://min-api.cryptocompare.com/data", "ETH");
        assert_eq!(
            url,
            "https://min-api.cryptocompare.com/data/pricemultifull?fsyms=ETH&tsyms=USD"
        );
    }

    #[test]
    fn test_parse_full_payload() {
        let body = json!({
            "RAW": {
                "ETH": {
                    "USD": {
                        "PRICE": 3500.25,
                        "CHANGEPCT24HOUR": -1.75,
                        "HIGH24HOUR": 3600.0,
                        "LOW24HOUR": 3400.0,
                        "VOLUME24HOUR": 450_000.0
                    }
                }
            }
        });

        let quote = CryptoCompareAdapter.parse_quote(&eth(), "ETH", &body).unwrap();
        assert_eq!(quote.price, 3500.25);
        assert_eq!(quote.change_24h, -1.75);
        assert_eq!(quote.high_24h, Some(3600.0));
        assert_eq!(quote.low_24h, Some(3400.0));
        assert_eq!(quote.volume_24h, Some(450_000.0));
        assert_eq!(quote.source, Provider::CryptoCompare);
    }

    #[test]
    fn test_parse_error_body_is_unknown_symbol() {
        let body = json!({"Response": "Error", "Message": "fsyms param seems to be mostly invalid"});
        let err = CryptoCompareAdapter.parse_quote(&eth(), "ETH", &body).unwrap_err();
        assert!(matches!(err, ProviderError::UnknownSymbol(_)));
    }

    #[test]
    fn test_parse_missing_price_is_error() {
        let body = json!({"RAW": {"ETH": {"USD": {"CHANGEPCT24HOUR": 2.0}}}});
        let err = CryptoCompareAdapter.parse_quote(&eth(), "ETH", &body).unwrap_err();
        assert!(matches!(err, ProviderError::MissingPrice));
    }
}
