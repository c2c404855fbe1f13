//! The cache slot and its record.

use crate::models::{CacheStatus, PickupLine, PuzzleCategory, PuzzleDate};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Contents of the slot. Every field is absent until the first fetch.
///
/// `pickup_lines[i]` and `images[i]` belong to `categories[i]`.
#[derive(Debug, Default)]
struct CacheRecord {
    date: Option<PuzzleDate>,
    puzzle_id: Option<i64>,
    categories: Option<Vec<PuzzleCategory>>,
    pickup_lines: Option<Vec<Vec<PickupLine>>>,
    images: Option<Vec<String>>,
    fetched_at: Option<DateTime<Utc>>,
}

/// Snapshot of a cache hit.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedPuzzle {
    pub date: PuzzleDate,
    pub puzzle_id: i64,
    pub categories: Vec<PuzzleCategory>,
}

/// Process-wide single-slot cache.
///
/// The lock only guards reads and writes of the record; callers never hold
/// it across an external call.
#[derive(Debug, Default)]
pub struct PuzzleCache {
    record: RwLock<CacheRecord>,
}

impl PuzzleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached puzzle if the slot holds `date`.
    pub async fn get(&self, date: &PuzzleDate) -> Option<CachedPuzzle> {
        let record = self.record.read().await;
        if record.date.as_ref() != Some(date) {
            return None;
        }
        let categories = record.categories.clone()?;
        Some(CachedPuzzle {
            date: date.clone(),
            puzzle_id: record.puzzle_id.unwrap_or_default(),
            categories,
        })
    }

    /// Replace the slot with a freshly fetched puzzle, dropping enrichment.
    pub async fn set(&self, date: PuzzleDate, puzzle_id: i64, categories: Vec<PuzzleCategory>) {
        let mut record = self.record.write().await;
        if let Some(previous) = record.date.as_ref().filter(|d| **d != date) {
            debug!("Cache slot rolling over from {} to {}", previous, date);
        }
        *record = CacheRecord {
            date: Some(date),
            puzzle_id: Some(puzzle_id),
            categories: Some(categories),
            pickup_lines: None,
            images: None,
            fetched_at: Some(Utc::now()),
        };
    }

    /// Cached pickup lines for `date`, if any.
    pub async fn pickup_lines(&self, date: &PuzzleDate) -> Option<Vec<Vec<PickupLine>>> {
        let record = self.record.read().await;
        if record.date.as_ref() != Some(date) {
            return None;
        }
        record.pickup_lines.clone()
    }

    /// Cached images for `date`, if any.
    pub async fn images(&self, date: &PuzzleDate) -> Option<Vec<String>> {
        let record = self.record.read().await;
        if record.date.as_ref() != Some(date) {
            return None;
        }
        record.images.clone()
    }

    /// Store pickup lines if the slot still holds `date`.
    ///
    /// Returns `false` and leaves the slot untouched when the slot has moved
    /// on to another date while the lines were being generated.
    pub async fn set_pickup_lines(&self, date: &PuzzleDate, lines: Vec<Vec<PickupLine>>) -> bool {
        let mut record = self.record.write().await;
        if record.date.as_ref() != Some(date) {
            warn!(
                "Discarding pickup lines for {}: cache now holds {:?}",
                date,
                record.date.as_ref().map(PuzzleDate::as_str)
            );
            return false;
        }
        record.pickup_lines = Some(lines);
        true
    }

    /// Store images if the slot still holds `date`.
    pub async fn set_images(&self, date: &PuzzleDate, images: Vec<String>) -> bool {
        let mut record = self.record.write().await;
        if record.date.as_ref() != Some(date) {
            warn!(
                "Discarding images for {}: cache now holds {:?}",
                date,
                record.date.as_ref().map(PuzzleDate::as_str)
            );
            return false;
        }
        record.images = Some(images);
        true
    }

    /// Summary of what the slot currently holds.
    pub async fn status(&self) -> CacheStatus {
        let record = self.record.read().await;
        CacheStatus {
            date: record.date.clone(),
            puzzle_id: record.puzzle_id,
            fetched_at: record.fetched_at,
            has_pickup_lines: record.pickup_lines.is_some(),
            has_images: record.images.is_some(),
        }
    }
}
