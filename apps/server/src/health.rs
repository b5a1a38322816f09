//! HTTP health endpoint.
//!
//! A tiny status page so hosting platforms can probe the process while
//! the Telegram long-polling loop runs in the background.

use axum::routing::get;
use axum::{Json, Router};
use cryptobot_market::ProviderConfig;
use serde_json::{json, Value};
use tracing::{error, info};

fn status_body(providers: &[ProviderConfig]) -> Value {
    json!({
        "status": "ok",
        "service": "crypto-price-bot",
        "providers": providers
            .iter()
            .map(|config| json!({
                "name": config.provider.as_str(),
                "priority": config.priority,
                "requests_per_minute": config.requests_per_minute,
            }))
            .collect::<Vec<_>>(),
    })
}

/// Serve the health endpoint until the process exits.
pub async fn serve(port: u16, providers: Vec<ProviderConfig>) {
    let body = status_body(&providers);
    let handler = move || {
        let body = body.clone();
        async move { Json(body) }
    };

    let app = Router::new()
        .route("/", get(handler.clone()))
        .route("/health", get(handler));

    let addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind health endpoint on {}: {}", addr, e);
            return;
        }
    };

    info!("Health endpoint listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Health endpoint error: {}", e);
    }
}
