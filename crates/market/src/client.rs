//! HTTP transport for provider requests.

use crate::adapter::adapter_for;
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use cryptobot_core::{PriceQuote, Symbol};
use std::time::Duration;
use tracing::debug;

/// Transport seam between the fetcher and provider endpoints.
///
/// Production uses [`HttpTransport`]; tests substitute scripted
/// implementations to exercise the fallback chain without a network.
#[async_trait]
pub trait QuoteTransport: Send + Sync {
    /// Issue one price request against a provider.
    async fn fetch_quote(
        &self,
        config: &ProviderConfig,
        symbol: &Symbol,
        provider_symbol: &str,
    ) -> Result<PriceQuote, ProviderError>;
}

/// reqwest-backed transport with a bounded per-request timeout.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport whose every request times out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }
}

#[async_trait]
impl QuoteTransport for HttpTransport {
    async fn fetch_quote(
        &self,
        config: &ProviderConfig,
        symbol: &Symbol,
        provider_symbol: &str,
    ) -> Result<PriceQuote, ProviderError> {
        let adapter = adapter_for(config.provider);
        let url = adapter.price_url(&config.base_url, provider_symbol);
        debug!("{}: GET {}", config.provider, url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        adapter.parse_quote(symbol, provider_symbol, &body)
    }
}
