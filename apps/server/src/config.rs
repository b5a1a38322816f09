//! Application configuration.

use cryptobot_market::MarketConfig;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider chain and HTTP settings.
    pub market: MarketConfig,
    /// Port for the HTTP health endpoint.
    pub health_port: u16,
    /// Logging level.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            market: MarketConfig::default(),
            health_port: 8080,
            log_level: "info".to_string(),
        }
    }
}
