//! HTTP server implementation using Axum.

use crate::handlers::{
    game_data, hardcoded_game, health, images, missing_date, pickup_lines, puzzle_answers,
    svc_proxy,
};
use axum::{routing::get, Router};
use connections_core::network::HttpClient;
use connections_core::PuzzleService;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    /// Puzzle service owning the cache slot
    pub service: PuzzleService,
    /// Client for the `/svc` passthrough
    pub proxy_client: HttpClient,
    /// Upstream host the passthrough forwards to
    pub upstream_base_url: String,
}

/// Build the router with every endpoint and middleware attached.
pub fn build_router(state: Arc<AppState>) -> Router {
    // The game client is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/puzzle-answers/:date", get(puzzle_answers))
        .route("/puzzle-answers/", get(missing_date))
        .route("/pickup-lines/:date", get(pickup_lines))
        .route("/pickup-lines/", get(missing_date))
        .route("/images/:date", get(images))
        .route("/images/", get(missing_date))
        .route("/game-data/:date", get(game_data))
        .route("/game-data/", get(missing_date))
        .route("/hardcoded-game", get(hardcoded_game))
        .route("/svc/*path", get(svc_proxy))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(state: AppState, host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let app = build_router(Arc::new(state));

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
