pub mod handlers;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::CONFIG;

/// The studio's HTTP surface: the two gateway proxies plus a health
/// probe. Preflight requests are answered by the permissive CORS layer.
pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/generate-textile-design",
            post(handlers::generate_textile_design),
        )
        .route("/textile-ai-assistant", post(handlers::textile_ai_assistant))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve() -> anyhow::Result<()> {
    let router = build_router();
    let listener = TcpListener::bind(&CONFIG.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", CONFIG.bind_addr))?;
    info!("Textile design studio listening on {}", CONFIG.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        return;
    }
    info!("Shutdown signal received");
}
