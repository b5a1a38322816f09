//! Crypto Price Bot - Headless Server
//!
//! A Telegram bot that answers cryptocurrency price queries through a
//! prioritized chain of market data providers.

mod config;
mod health;

use clap::Parser;
use config::AppConfig;
use cryptobot_bot::PriceBot;
use cryptobot_market::PriceFetcher;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Crypto Price Bot CLI
#[derive(Parser, Debug)]
#[command(name = "crypto-bot")]
#[command(about = "Telegram crypto price bot with provider fallback", long_about = None)]
struct Args {
    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Port for the HTTP health endpoint
    #[arg(long, default_value_t = 8080)]
    health_port: u16,

    /// Per-request timeout in seconds for provider calls
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let mut config = AppConfig::default();
    config.health_port = args.health_port;
    config.log_level = args.log_level;
    config.market.request_timeout_secs = args.timeout_secs;

    init_logging(&config.log_level);

    info!("🚀 Crypto Price Bot starting...");
    info!("  Health Port: {}", config.health_port);
    info!("  Request Timeout: {}s", config.market.request_timeout_secs);
    for provider in &config.market.providers {
        info!(
            "  Provider {}: {} ({} req/min)",
            provider.priority,
            provider.provider.display_name(),
            provider.requests_per_minute
        );
    }

    let token = match std::env::var("TELEGRAM_BOT_TOKEN") {
        Ok(token) if !token.is_empty() => token,
        _ => {
            error!("TELEGRAM_BOT_TOKEN is not set");
            return;
        }
    };

    let fetcher = Arc::new(PriceFetcher::new(config.market.clone()));

    // Health endpoint for hosting platforms
    let health_providers = fetcher.providers().to_vec();
    tokio::spawn(health::serve(config.health_port, health_providers));

    info!("🤖 Starting Telegram dispatcher...");
    let bot = Arc::new(PriceBot::new(&token, fetcher));
    bot.run().await;

    info!("👋 Crypto Price Bot stopped");
}
