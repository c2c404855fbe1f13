//! Centralized configuration for the Connections backend.
//!
//! Compile-time defaults live on unit structs as associated constants. The
//! runtime-tunable subset is collected in [`ServiceConfig`], which the server
//! binary fills from its command line.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const USER_AGENT: &'static str = "connections-backend/1.0";
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Generation calls routinely take tens of seconds per image.
    pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);
}

/// Upstream puzzle service configuration.
pub struct UpstreamConfig;

impl UpstreamConfig {
    pub const BASE_URL: &'static str = "https://www.nytimes.com";
    /// Path prefix proxied verbatim by the passthrough route.
    pub const SVC_PREFIX: &'static str = "svc";
    pub const PUZZLE_PATH: &'static str = "svc/connections/v2";
}

/// Generative AI service configuration.
pub struct GenerationConfig;

impl GenerationConfig {
    pub const API_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const TEXT_MODEL: &'static str = "gpt-4o";
    pub const IMAGE_MODEL: &'static str = "dall-e-3";
    pub const IMAGE_SIZE: &'static str = "1024x1024";
    pub const MAX_CONCURRENT_GENERATIONS: usize = 4;
    pub const MIN_SCORE: u8 = 0;
    pub const MAX_SCORE: u8 = 10;
}

/// Runtime configuration for the puzzle service and its external clients.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the upstream puzzle service.
    pub upstream_base_url: String,
    /// Base URL of the OpenAI-compatible API.
    pub openai_base_url: String,
    /// Bearer token for the generation API. Generation fails without it.
    pub openai_api_key: Option<String>,
    pub text_model: String,
    pub image_model: String,
    /// Upper bound on in-flight generation calls per enrichment batch.
    pub max_concurrent_generations: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            upstream_base_url: UpstreamConfig::BASE_URL.to_string(),
            openai_base_url: GenerationConfig::API_BASE_URL.to_string(),
            openai_api_key: None,
            text_model: GenerationConfig::TEXT_MODEL.to_string(),
            image_model: GenerationConfig::IMAGE_MODEL.to_string(),
            max_concurrent_generations: GenerationConfig::MAX_CONCURRENT_GENERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeouts_are_reasonable() {
        assert!(NetworkConfig::REQUEST_TIMEOUT > Duration::ZERO);
        assert!(NetworkConfig::GENERATION_TIMEOUT > NetworkConfig::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_default_service_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.upstream_base_url, "https://www.nytimes.com");
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.max_concurrent_generations, 4);
    }
}
