//! Enrichment generators.
//!
//! Two independent per-category generators sit behind traits so the service
//! can be exercised without a generative API:
//! - [`PickupLineGenerator`]: scored pickup lines for a category's words
//! - [`ImageGenerator`]: a base64 illustration for a category's title
//!
//! [`OpenAiClient`] implements both against an OpenAI-compatible API, and
//! [`generate_ordered`] runs either one over a whole board.

mod fan_out;
mod openai;
mod prompt;

pub use fan_out::generate_ordered;
pub use openai::{parse_pickup_lines, OpenAiClient};
pub use prompt::{image_prompt, pickup_line_prompt, PICKUP_LINES_PER_CATEGORY};

use crate::models::{PickupLine, PuzzleCategory};
use crate::Result;
use async_trait::async_trait;

/// Generates scored pickup lines for one category.
#[async_trait]
pub trait PickupLineGenerator: Send + Sync {
    async fn generate(&self, category: &PuzzleCategory) -> Result<Vec<PickupLine>>;
}

/// Generates one illustration for a category title, returned as base64.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, title: &str) -> Result<String>;
}
