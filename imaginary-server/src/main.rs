//! Imaginary Server - Headless Daemon
//!
//! A pure Rust HTTP server that:
//! - Proxies image generation, prompt improvement, and style extraction to
//!   the AI gateway on /api/*
//! - Uploads assets to the media CDN with a signed request
//! - Persists the personal image library in Postgres (when configured)
//!
//! Access via: http://localhost:8090

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod api;
mod config;
mod state;
#[cfg(test)]
mod test_helpers;

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig::from_env();
    info!("🚀 Imaginary Server starting on port {}...", config.port);

    let state = AppState::new(&config).await?;
    info!("✅ Application state initialized");
    if state.repository().is_some() {
        info!("📚 Image library connected");
    } else {
        info!("📚 No DATABASE_URL set; library endpoints disabled");
    }

    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("🔌 API available at http://localhost:{}/api/", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::router())
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .with_state(state)
        // Reference images travel as base64 data URLs in JSON bodies.
        .layer(DefaultBodyLimit::max(100 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({"status": "ok"})),
    )
}
