//! Connections Core - puzzle caching and enrichment for the Connections game.
//!
//! This crate fetches the daily puzzle from the upstream puzzle service,
//! flattens it into categories, and layers AI-generated pickup lines and
//! images on top. It can be used programmatically without any HTTP layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use connections_core::{PuzzleDate, PuzzleService};
//!
//! #[tokio::main]
//! async fn main() -> connections_core::Result<()> {
//!     let service = PuzzleService::builder().build()?;
//!     let date = PuzzleDate::parse("2024-03-09")?;
//!
//!     let answers = service.puzzle_answers(&date).await?;
//!     println!("Puzzle #{} has {} categories", answers.id, answers.data.len());
//!
//!     let lines = service.pickup_lines(&date).await?;
//!     println!("Generated {} sets of pickup lines", lines.pickup_lines.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod demo;
pub mod error;
pub mod generation;
pub mod models;
pub mod network;
pub mod transform;
pub mod upstream;

mod api;

// Re-export commonly used types
pub use cache::{CachedPuzzle, PuzzleCache};
pub use config::ServiceConfig;
pub use error::{ConnectionsError, ErrorClass, GenerationKind, Result};
pub use generation::{ImageGenerator, OpenAiClient, PickupLineGenerator};
pub use models::{
    CacheStatus, GameDataResponse, ImagesResponse, OverallScore, PickupLine,
    PickupLinesResponse, PuzzleAnswersResponse, PuzzleCategory, PuzzleDate, RawPuzzle,
};
pub use upstream::{NytPuzzleClient, PuzzleSource};

// Re-export builder from api module
pub use api::PuzzleServiceBuilder;

use std::sync::Arc;

/// Main entry point for puzzle operations.
///
/// Owns the single-slot cache and the three external collaborators. Build it
/// once at startup and share it by reference (or `Arc`) with every caller; a
/// fresh service starts with an empty cache, so tests never share state.
///
/// The public operations are implemented in the `api` submodules:
/// - [`PuzzleService::puzzle_answers`]: base puzzle, fetched on a cache miss
/// - [`PuzzleService::pickup_lines`] / [`PuzzleService::images`]: enrichment
///   over an already-cached puzzle
/// - [`PuzzleService::game_data`]: deprecated combined call
pub struct PuzzleService {
    cache: PuzzleCache,
    puzzle_source: Arc<dyn PuzzleSource>,
    pickup_line_generator: Arc<dyn PickupLineGenerator>,
    image_generator: Arc<dyn ImageGenerator>,
    max_concurrent_generations: usize,
}

impl PuzzleService {
    /// Create a builder for PuzzleService.
    pub fn builder() -> PuzzleServiceBuilder {
        PuzzleServiceBuilder::new()
    }

    /// Upper bound on in-flight generation calls per enrichment batch.
    pub fn max_concurrent_generations(&self) -> usize {
        self.max_concurrent_generations
    }
}
