mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{BlogRequest, ErrorResponse};

use crate::{Result, config::Config, page, provider::GeminiClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/health", get(page::health_check))
        .route("/api/blog", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize the provider client
    let provider = GeminiClient::new(config.provider.clone());

    // Create application state
    let state = AppState {
        provider: Arc::new(provider),
    };

    // Create router
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
