//! Builder for configuring PuzzleService initialization.

use std::sync::Arc;

use crate::cache::PuzzleCache;
use crate::config::{NetworkConfig, ServiceConfig};
use crate::error::Result;
use crate::generation::{ImageGenerator, OpenAiClient, PickupLineGenerator};
use crate::network::HttpClient;
use crate::upstream::{NytPuzzleClient, PuzzleSource};
use crate::PuzzleService;

/// Builder for configuring PuzzleService initialization.
///
/// Any collaborator left unset is built from the [`ServiceConfig`]: the
/// upstream client talks to `upstream_base_url`, and both generators share
/// one OpenAI-compatible client.
///
/// # Example
///
/// ```rust,ignore
/// use connections_core::{PuzzleService, ServiceConfig};
///
/// let service = PuzzleService::builder()
///     .config(ServiceConfig {
///         openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
///         ..Default::default()
///     })
///     .build()?;
/// ```
#[derive(Default)]
pub struct PuzzleServiceBuilder {
    config: ServiceConfig,
    puzzle_source: Option<Arc<dyn PuzzleSource>>,
    pickup_line_generator: Option<Arc<dyn PickupLineGenerator>>,
    image_generator: Option<Arc<dyn ImageGenerator>>,
}

impl PuzzleServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime configuration for the default collaborators.
    pub fn config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the upstream puzzle source.
    pub fn puzzle_source(mut self, source: Arc<dyn PuzzleSource>) -> Self {
        self.puzzle_source = Some(source);
        self
    }

    /// Override the pickup line generator.
    pub fn pickup_line_generator(mut self, generator: Arc<dyn PickupLineGenerator>) -> Self {
        self.pickup_line_generator = Some(generator);
        self
    }

    /// Override the image generator.
    pub fn image_generator(mut self, generator: Arc<dyn ImageGenerator>) -> Self {
        self.image_generator = Some(generator);
        self
    }

    /// Build the PuzzleService instance.
    pub fn build(self) -> Result<PuzzleService> {
        let puzzle_source = match self.puzzle_source {
            Some(source) => source,
            None => {
                let http = HttpClient::with_timeout(NetworkConfig::REQUEST_TIMEOUT)?;
                Arc::new(NytPuzzleClient::new(
                    http,
                    Some(&self.config.upstream_base_url),
                ))
            }
        };

        // Both generators default to the same client, built only if needed.
        let mut openai: Option<Arc<OpenAiClient>> = None;
        let mut shared_openai = |config: &ServiceConfig| -> Result<Arc<OpenAiClient>> {
            if let Some(client) = &openai {
                return Ok(client.clone());
            }
            let http = HttpClient::with_timeout(NetworkConfig::GENERATION_TIMEOUT)?;
            let client = Arc::new(OpenAiClient::new(http, config));
            openai = Some(client.clone());
            Ok(client)
        };

        let pickup_line_generator: Arc<dyn PickupLineGenerator> = match self.pickup_line_generator
        {
            Some(generator) => generator,
            None => shared_openai(&self.config)? as Arc<dyn PickupLineGenerator>,
        };
        let image_generator: Arc<dyn ImageGenerator> = match self.image_generator {
            Some(generator) => generator,
            None => shared_openai(&self.config)? as Arc<dyn ImageGenerator>,
        };

        tracing::info!(
            "Puzzle service ready (upstream: {}, max concurrent generations: {})",
            self.config.upstream_base_url,
            self.config.max_concurrent_generations
        );

        Ok(PuzzleService {
            cache: PuzzleCache::new(),
            puzzle_source,
            pickup_line_generator,
            image_generator,
            max_concurrent_generations: self.config.max_concurrent_generations.max(1),
        })
    }
}
