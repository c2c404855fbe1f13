//! Static demo game handler.

use axum::Json;
use connections_core::GameDataResponse;

/// `GET /hardcoded-game`: a fully enriched example game, independent of the cache.
pub async fn hardcoded_game() -> Json<GameDataResponse> {
    Json(connections_core::demo::hardcoded_game())
}
