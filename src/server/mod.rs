pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{AskRequest, AskResponse, ErrorResponse, HealthResponse};

use crate::{Result, assistant::Assistant, config::Config};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    let body_limit = match state.max_body_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/", post(handlers::ask).options(handlers::preflight))
        .route("/ask", post(handlers::ask).options(handlers::preflight))
        .route("/health", get(handlers::health))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let assistant = Assistant::from_config(&config).await?;

    let app = router(AppState {
        assistant: Arc::new(assistant),
        max_body_bytes: config.server.max_body_bytes,
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
