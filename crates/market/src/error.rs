//! Error types for provider operations.

use thiserror::Error;

/// Errors from a single provider attempt.
///
/// Every variant is a soft failure: the fetcher logs it and advances to
/// the next provider in the chain. Nothing here is surfaced to callers
/// of `fetch_price`.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Response has no price field")]
    MissingPrice,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Symbol not listed: {0}")]
    UnknownSymbol(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else if err.is_decode() {
            ProviderError::Parse(err.to_string())
        } else {
            ProviderError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}

impl ProviderError {
    /// Returns true if the same request could plausibly succeed on retry.
    /// The fetcher never retries within one lookup; callers polling on a
    /// schedule can use this to decide whether a provider is worth keeping.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Http(_) | ProviderError::Timeout(_) | ProviderError::RateLimited => true,
            ProviderError::Status(code) => *code >= 500,
            ProviderError::Parse(_)
            | ProviderError::MissingPrice
            | ProviderError::UnknownSymbol(_) => false,
        }
    }
}
