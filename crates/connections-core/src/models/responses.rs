//! Response bodies for the HTTP endpoints.

use super::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /puzzle-answers/{date}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleAnswersResponse {
    pub date: PuzzleDate,
    pub data: Vec<PuzzleCategory>,
    pub id: i64,
}

/// `GET /pickup-lines/{date}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupLinesResponse {
    pub date: PuzzleDate,
    pub pickup_lines: Vec<Vec<PickupLine>>,
}

/// `GET /images/{date}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub date: PuzzleDate,
    /// Base64-encoded images, one per category.
    pub images: Vec<String>,
}

/// Combined payload of the deprecated `/game-data/{date}` endpoint and the
/// static demo game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDataResponse {
    pub date: PuzzleDate,
    pub id: i64,
    pub data: Vec<PuzzleCategory>,
    pub pickup_lines: Vec<Vec<PickupLine>>,
}

/// Summary of the cache slot, reported by the health endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatus {
    pub date: Option<PuzzleDate>,
    pub puzzle_id: Option<i64>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub has_pickup_lines: bool,
    pub has_images: bool,
}
