//! Normalized price quote.

use crate::{Provider, Symbol};
use serde::{Deserialize, Serialize};

/// Normalized result of a successful provider call.
///
/// Constructed fresh per request and never mutated. The quote currency
/// is always USD; optional fields are absent when the provider did not
/// report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Uppercase ticker this quote is for.
    pub symbol: Symbol,
    /// Last price in USD.
    pub price: f64,
    /// Signed 24h change in percent. Zero when the provider omits it.
    pub change_24h: f64,
    /// 24h high, if reported.
    pub high_24h: Option<f64>,
    /// 24h low, if reported.
    pub low_24h: Option<f64>,
    /// 24h volume, if reported.
    pub volume_24h: Option<f64>,
    /// Provider that supplied this quote.
    pub source: Provider,
}

impl PriceQuote {
    /// Create a quote with only the mandatory fields.
    pub fn new(symbol: Symbol, price: f64, source: Provider) -> Self {
        Self {
            symbol,
            price,
            change_24h: 0.0,
            high_24h: None,
            low_24h: None,
            volume_24h: None,
            source,
        }
    }

    /// Builder pattern: set the 24h change.
    pub fn with_change_24h(mut self, change: f64) -> Self {
        self.change_24h = change;
        self
    }

    /// Builder pattern: set the 24h high/low range.
    pub fn with_range_24h(mut self, low: Option<f64>, high: Option<f64>) -> Self {
        self.low_24h = low;
        self.high_24h = high;
        self
    }

    /// Builder pattern: set the 24h volume.
    pub fn with_volume_24h(mut self, volume: Option<f64>) -> Self {
        self.volume_24h = volume;
        self
    }

    /// Whether the reported 24h range brackets the price.
    ///
    /// Providers occasionally report a range that does not contain the
    /// last price. Callers treat violations as provider noise, not as
    /// an error.
    pub fn is_range_consistent(&self) -> bool {
        match (self.low_24h, self.high_24h) {
            (Some(low), Some(high)) => low <= self.price && self.price <= high,
            _ => true,
        }
    }

    /// True when the 24h change is flat or positive.
    #[inline]
    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }
}
