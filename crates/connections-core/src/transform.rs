//! Normalization of upstream puzzle payloads.

use crate::models::{PuzzleCategory, RawPuzzle};

/// Flatten the upstream categories into [`PuzzleCategory`] entries.
///
/// Difficulty is the 1-based index of the category in upstream order, and
/// words keep the order of the category's cards.
pub fn transform(raw: &RawPuzzle) -> Vec<PuzzleCategory> {
    raw.categories
        .iter()
        .enumerate()
        .map(|(index, category)| PuzzleCategory {
            category: category.title.clone(),
            words: category
                .cards
                .iter()
                .map(|card| card.content.clone())
                .collect(),
            difficulty: index + 1,
        })
        .collect()
}
