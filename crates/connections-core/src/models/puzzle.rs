//! Puzzle and enrichment types served to the game client.

use serde::{Deserialize, Serialize};

/// One solved group of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleCategory {
    pub category: String,
    pub words: Vec<String>,
    /// 1-based position of the category in upstream order.
    pub difficulty: usize,
}

/// Model-assigned sub-scores for a pickup line, each in `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallScore {
    #[serde(rename = "Creativity")]
    pub creativity: u8,
    #[serde(rename = "Humor")]
    pub humor: u8,
}

/// A generated pickup line built around one word of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupLine {
    pub word: String,
    pub line: String,
    pub overall_score: OverallScore,
}
