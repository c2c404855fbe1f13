//! Base puzzle retrieval: cache lookup, upstream fetch, transform.

use crate::cache::CachedPuzzle;
use crate::models::{CacheStatus, PuzzleAnswersResponse, PuzzleDate};
use crate::transform::transform;
use crate::{PuzzleService, Result};
use tracing::{debug, info};

impl PuzzleService {
    /// Puzzle answers for `date`, fetched from upstream at most once per
    /// cached date.
    pub async fn puzzle_answers(&self, date: &PuzzleDate) -> Result<PuzzleAnswersResponse> {
        let puzzle = self.ensure_puzzle(date).await?;
        Ok(PuzzleAnswersResponse {
            date: puzzle.date,
            data: puzzle.categories,
            id: puzzle.puzzle_id,
        })
    }

    /// Summary of the cache slot.
    pub async fn cache_status(&self) -> CacheStatus {
        self.cache.status().await
    }

    /// Return the cached puzzle for `date`, fetching and caching it on a miss.
    pub(crate) async fn ensure_puzzle(&self, date: &PuzzleDate) -> Result<CachedPuzzle> {
        if let Some(hit) = self.cache.get(date).await {
            debug!("Cache hit for {}", date);
            return Ok(hit);
        }

        info!("Cache miss for {}, fetching upstream", date);
        let raw = self.puzzle_source.fetch(date).await?;
        let categories = transform(&raw);
        self.cache
            .set(date.clone(), raw.id, categories.clone())
            .await;

        Ok(CachedPuzzle {
            date: date.clone(),
            puzzle_id: raw.id,
            categories,
        })
    }

    /// Return the cached puzzle for `date` without fetching.
    pub(crate) async fn require_cached(&self, date: &PuzzleDate) -> Result<CachedPuzzle> {
        self.cache
            .get(date)
            .await
            .ok_or_else(|| crate::ConnectionsError::PuzzleNotCached {
                date: date.to_string(),
            })
    }
}
