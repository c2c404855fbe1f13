//! Base puzzle handler.

use super::shared::parse_date;
use crate::error::ApiError;
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::Json;
use connections_core::PuzzleAnswersResponse;
use std::sync::Arc;
use tracing::debug;

/// `GET /puzzle-answers/{date}`: the board, served from cache when possible.
pub async fn puzzle_answers(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<PuzzleAnswersResponse>, ApiError> {
    let date = parse_date(&date)?;
    debug!("puzzle-answers for {}", date);
    Ok(Json(state.service.puzzle_answers(&date).await?))
}
