//! Raw payload returned by the upstream puzzle service.

use serde::Deserialize;

/// Puzzle-of-the-day document. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPuzzle {
    #[serde(default)]
    pub id: i64,
    pub categories: Vec<RawCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub title: String,
    pub cards: Vec<RawCard>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCard {
    pub content: String,
}
