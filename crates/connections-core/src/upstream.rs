//! Upstream puzzle fetcher.
//!
//! [`PuzzleSource`] is the seam the service depends on; [`NytPuzzleClient`]
//! is the production implementation that reads the public puzzle JSON.

use crate::config::UpstreamConfig;
use crate::models::{PuzzleDate, RawPuzzle};
use crate::network::{join_url, HttpClient};
use crate::Result;
use async_trait::async_trait;
use tracing::info;

/// Source of raw puzzle-of-the-day documents.
#[async_trait]
pub trait PuzzleSource: Send + Sync {
    /// Fetch the raw puzzle for `date`.
    async fn fetch(&self, date: &PuzzleDate) -> Result<RawPuzzle>;
}

/// Client for the upstream puzzle JSON service.
pub struct NytPuzzleClient {
    http: HttpClient,
    base_url: String,
}

impl NytPuzzleClient {
    /// Create a client targeting the given base URL.
    ///
    /// If `base_url` is `None`, defaults to the public upstream host.
    pub fn new(http: HttpClient, base_url: Option<&str>) -> Self {
        let base_url = base_url
            .unwrap_or(UpstreamConfig::BASE_URL)
            .trim_end_matches('/')
            .to_string();
        Self { http, base_url }
    }

    /// URL of the puzzle document for `date`.
    pub fn puzzle_url(&self, date: &PuzzleDate) -> String {
        join_url(
            &self.base_url,
            &format!("{}/{}.json", UpstreamConfig::PUZZLE_PATH, date),
        )
    }
}

#[async_trait]
impl PuzzleSource for NytPuzzleClient {
    async fn fetch(&self, date: &PuzzleDate) -> Result<RawPuzzle> {
        let url = self.puzzle_url(date);
        info!("Fetching upstream puzzle for {}", date);
        let puzzle: RawPuzzle = self.http.get_json(&url).await?;
        info!(
            "Upstream puzzle {} has {} categories",
            puzzle.id,
            puzzle.categories.len()
        );
        Ok(puzzle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_url() {
        let client = NytPuzzleClient::new(HttpClient::new().unwrap(), None);
        let date = PuzzleDate::parse("2024-03-09").unwrap();
        assert_eq!(
            client.puzzle_url(&date),
            "https://www.nytimes.com/svc/connections/v2/2024-03-09.json"
        );

        let client = NytPuzzleClient::new(HttpClient::new().unwrap(), Some("http://127.0.0.1:9/"));
        assert_eq!(
            client.puzzle_url(&date),
            "http://127.0.0.1:9/svc/connections/v2/2024-03-09.json"
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_an_upstream_class_error() {
        // Port 9 (discard) is not expected to serve HTTP.
        let client = NytPuzzleClient::new(HttpClient::new().unwrap(), Some("http://127.0.0.1:9"));
        let date = PuzzleDate::parse("2024-03-09").unwrap();
        let err = client.fetch(&date).await.unwrap_err();
        assert_eq!(err.class(), crate::ErrorClass::Upstream);
    }
}
