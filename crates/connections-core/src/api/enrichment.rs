//! Pickup line and image enrichment over a cached puzzle.

use crate::cache::CachedPuzzle;
use crate::generation::generate_ordered;
use crate::models::{
    GameDataResponse, ImagesResponse, PickupLine, PickupLinesResponse, PuzzleDate,
};
use crate::{PuzzleService, Result};
use tracing::{info, warn};

impl PuzzleService {
    /// Pickup lines for every category of the cached puzzle for `date`.
    ///
    /// Never fetches the base puzzle: fails with `PuzzleNotCached` until
    /// [`PuzzleService::puzzle_answers`] has run for `date`.
    pub async fn pickup_lines(&self, date: &PuzzleDate) -> Result<PickupLinesResponse> {
        let puzzle = self.require_cached(date).await?;
        let pickup_lines = self.pickup_lines_for(&puzzle).await?;
        Ok(PickupLinesResponse {
            date: puzzle.date,
            pickup_lines,
        })
    }

    /// One base64 image per category of the cached puzzle for `date`.
    pub async fn images(&self, date: &PuzzleDate) -> Result<ImagesResponse> {
        let puzzle = self.require_cached(date).await?;

        if let Some(images) = self.cache.images(date).await {
            return Ok(ImagesResponse {
                date: puzzle.date,
                images,
            });
        }

        info!(
            "Generating {} images for {}",
            puzzle.categories.len(),
            date
        );
        let calls = puzzle
            .categories
            .iter()
            .map(|category| self.image_generator.generate(&category.category))
            .collect();
        let images = generate_ordered(calls, self.max_concurrent_generations).await?;

        if !self.cache.set_images(date, images.clone()).await {
            warn!("Serving images for {} without caching them", date);
        }

        Ok(ImagesResponse {
            date: puzzle.date,
            images,
        })
    }

    /// Puzzle and pickup lines in one call.
    ///
    /// Deprecated: superseded by the split `puzzle_answers` / `pickup_lines`
    /// calls, which let clients render the board before generation finishes.
    pub async fn game_data(&self, date: &PuzzleDate) -> Result<GameDataResponse> {
        let puzzle = self.ensure_puzzle(date).await?;
        let pickup_lines = self.pickup_lines_for(&puzzle).await?;
        Ok(GameDataResponse {
            date: puzzle.date,
            id: puzzle.puzzle_id,
            data: puzzle.categories,
            pickup_lines,
        })
    }

    async fn pickup_lines_for(&self, puzzle: &CachedPuzzle) -> Result<Vec<Vec<PickupLine>>> {
        if let Some(lines) = self.cache.pickup_lines(&puzzle.date).await {
            return Ok(lines);
        }

        info!(
            "Generating pickup lines for {} categories of {}",
            puzzle.categories.len(),
            puzzle.date
        );
        let calls = puzzle
            .categories
            .iter()
            .map(|category| self.pickup_line_generator.generate(category))
            .collect();
        let lines = generate_ordered(calls, self.max_concurrent_generations).await?;

        if !self.cache.set_pickup_lines(&puzzle.date, lines.clone()).await {
            warn!("Serving pickup lines for {} without caching them", puzzle.date);
        }
        Ok(lines)
    }
}
