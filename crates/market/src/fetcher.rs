//! Ordered provider fallback for price lookups.

use crate::client::{HttpTransport, QuoteTransport};
use crate::config::{MarketConfig, ProviderConfig};
use crate::limiter::RateLimiter;
use cryptobot_core::{PriceQuote, Symbol};
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// Fetches prices through a prioritized provider chain.
///
/// Never fails outward: every provider-level problem (timeout, bad
/// status, malformed payload, rate-limit rejection) is absorbed and the
/// caller sees either a quote or `None`. A `None` therefore cannot
/// distinguish "symbol does not exist" from "all providers down".
pub struct PriceFetcher {
    providers: Vec<ProviderConfig>,
    limiter: RateLimiter,
    transport: Arc<dyn QuoteTransport>,
}

impl PriceFetcher {
    /// Create a fetcher with the default HTTP transport.
    pub fn new(config: MarketConfig) -> Self {
        let transport = Arc::new(HttpTransport::new(config.request_timeout()));
        let limiter = RateLimiter::new(config.rate_limits());
        Self::with_transport(config, limiter, transport)
    }

    /// Create a fetcher with an explicit limiter and transport.
    ///
    /// Lets callers substitute either piece: tests script the transport,
    /// and an alternate limiter (e.g. token bucket) can drop in without
    /// touching fetch logic.
    pub fn with_transport(
        config: MarketConfig,
        limiter: RateLimiter,
        transport: Arc<dyn QuoteTransport>,
    ) -> Self {
        let mut providers = config.providers;
        providers.sort_by_key(|provider| provider.priority);
        Self {
            providers,
            limiter,
            transport,
        }
    }

    /// Providers in fallback order.
    pub fn providers(&self) -> &[ProviderConfig] {
        &self.providers
    }

    /// Look up the current USD price for a ticker.
    ///
    /// Providers are tried in ascending priority and each gets exactly
    /// one attempt per call: a rate-limited provider is skipped without
    /// waiting, a failed provider advances the chain, and the first
    /// success returns immediately. Returns `None` when the symbol is
    /// invalid or every provider was skipped or failed.
    pub async fn fetch_price(&self, raw: &str) -> Option<PriceQuote> {
        let symbol = match Symbol::parse(raw) {
            Some(symbol) => symbol,
            None => {
                debug!("Rejected invalid symbol input: {:?}", raw);
                return None;
            }
        };

        for config in &self.providers {
            let provider = config.provider;

            if !self.limiter.try_admit(provider) {
                debug!("{}: rate limited, skipping for {}", provider, symbol);
                continue;
            }

            let provider_symbol = config.symbol_for(&symbol);
            match self
                .transport
                .fetch_quote(config, &symbol, &provider_symbol)
                .await
            {
                Ok(quote) => {
                    debug!("{}: {} = {}", provider, symbol, quote.price);
                    return Some(quote);
                }
                Err(e) => {
                    debug!("{}: {} lookup failed ({}), trying next provider", provider, symbol, e);
                }
            }
        }

        info!("No provider returned a price for {}", symbol);
        None
    }

    /// Look up several tickers concurrently.
    ///
    /// Results keep the input order; unresolvable symbols map to `None`.
    /// Lookups are independent: one symbol failing never affects another.
    pub async fn fetch_prices(&self, symbols: &[String]) -> Vec<(String, Option<PriceQuote>)> {
        let lookups: Vec<_> = symbols
            .iter()
            .map(|raw| async move { (raw.clone(), self.fetch_price(raw).await) })
            .collect();
        join_all(lookups).await
    }
}
