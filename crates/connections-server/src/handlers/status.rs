//! Health check handler.

use crate::server::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint, with a summary of the cache slot.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let cache = state.service.cache_status().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "cache": cache,
    }))
}
