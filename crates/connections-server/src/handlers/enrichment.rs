//! Enrichment handlers: pickup lines, images, and the deprecated combined call.

use super::shared::parse_date;
use crate::error::ApiError;
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::Json;
use connections_core::{GameDataResponse, ImagesResponse, PickupLinesResponse};
use std::sync::Arc;
use tracing::{debug, warn};

/// `GET /pickup-lines/{date}`. 404 until the puzzle for `date` is cached.
pub async fn pickup_lines(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<PickupLinesResponse>, ApiError> {
    let date = parse_date(&date)?;
    debug!("pickup-lines for {}", date);
    Ok(Json(state.service.pickup_lines(&date).await?))
}

/// `GET /images/{date}`. 404 until the puzzle for `date` is cached.
pub async fn images(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<ImagesResponse>, ApiError> {
    let date = parse_date(&date)?;
    debug!("images for {}", date);
    Ok(Json(state.service.images(&date).await?))
}

/// `GET /game-data/{date}`: puzzle plus pickup lines in one slow call.
///
/// Kept for older clients; new clients use the split endpoints.
pub async fn game_data(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<GameDataResponse>, ApiError> {
    let date = parse_date(&date)?;
    warn!("Deprecated /game-data endpoint called for {}", date);
    Ok(Json(state.service.game_data(&date).await?))
}
