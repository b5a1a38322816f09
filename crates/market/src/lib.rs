//! Market data collection with ordered provider fallback.
//!
//! This crate provides HTTP price lookups against multiple providers,
//! trying each in priority order until one yields usable data.
//!
//! ## Architecture
//!
//! - `adapter/` - Provider-specific request URLs and payload normalization
//! - `client` - HTTP transport seam between fetcher and providers
//! - `config` - Provider chain configuration and symbol mapping tables
//! - `limiter` - Per-provider sliding-window rate limiting
//! - `fetcher` - Ordered fallback price lookups

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod limiter;

pub use adapter::{
    adapter_for, BinanceAdapter, CoinGeckoAdapter, CryptoCompareAdapter, ProviderAdapter,
};
pub use client::{HttpTransport, QuoteTransport};
pub use config::{MarketConfig, ProviderConfig};
pub use error::ProviderError;
pub use fetcher::PriceFetcher;
pub use limiter::RateLimiter;
