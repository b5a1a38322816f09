//! Per-provider sliding-window rate limiting.
//!
//! Free-tier provider APIs enforce low per-minute ceilings. The limiter
//! keeps a trailing 60-second window of call timestamps per provider and
//! refuses admission once the configured ceiling is reached.

use cryptobot_core::Provider;
use dashmap::DashMap;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Trailing window length.
const WINDOW: Duration = Duration::from_secs(60);

/// Ceiling applied to providers without a configured limit.
const DEFAULT_LIMIT: u32 = 5;

/// Sliding-window request counter, one window per provider.
///
/// Admission is a single atomic step: the map entry guard is held across
/// prune, check and record, so two concurrent lookups can never both
/// claim the last remaining slot.
pub struct RateLimiter {
    limits: HashMap<Provider, u32>,
    windows: DashMap<Provider, VecDeque<Instant>>,
}

impl RateLimiter {
    /// Create a limiter with per-provider ceilings.
    pub fn new(limits: HashMap<Provider, u32>) -> Self {
        Self {
            limits,
            windows: DashMap::new(),
        }
    }

    /// Per-minute ceiling for a provider.
    pub fn limit_for(&self, provider: Provider) -> u32 {
        self.limits.get(&provider).copied().unwrap_or(DEFAULT_LIMIT)
    }

    /// Try to admit a call right now, recording it on success.
    pub fn try_admit(&self, provider: Provider) -> bool {
        self.try_admit_at(provider, Instant::now())
    }

    /// Try to admit a call at `now`, recording it on success.
    ///
    /// The window is never mutated on rejection.
    pub fn try_admit_at(&self, provider: Provider, now: Instant) -> bool {
        let limit = self.limit_for(provider);
        let mut window = self.windows.entry(provider).or_default();

        // A timestamp exactly WINDOW old falls outside the trailing window.
        while let Some(oldest) = window.front().copied() {
            if now.duration_since(oldest) >= WINDOW {
                window.pop_front();
            } else {
                break;
            }
        }

        if (window.len() as u32) < limit {
            window.push_back(now);
            true
        } else {
            false
        }
    }
}
