//! HTTP client shared by the upstream fetcher and the generation clients.
//!
//! Provides a wrapper around reqwest with:
//! - Configurable timeouts
//! - User-agent management
//! - Non-2xx responses turned into [`ConnectionsError::Upstream`]

use crate::config::{AppConfig, NetworkConfig};
use crate::{ConnectionsError, Result};
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Longest slice of an error body kept in error messages.
const ERROR_BODY_LIMIT: usize = 512;

/// HTTP client with timeout and status handling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    /// Default timeout for requests.
    default_timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_timeout(NetworkConfig::REQUEST_TIMEOUT)
    }

    /// Create a new HTTP client with a custom default timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(NetworkConfig::CONNECT_TIMEOUT)
            .user_agent(AppConfig::USER_AGENT)
            .build()
            .map_err(|e| ConnectionsError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: None,
            })?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Make a GET request and return the response whatever its status.
    pub async fn get_raw(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| request_failed("GET", url, self.default_timeout, e))
    }

    /// Make a GET request, failing on non-2xx status.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let response = self.get_raw(url).await?;
        check_response_status(response, url).await
    }

    /// GET a URL and decode its JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).await?;
        decode_json(response, url, self.default_timeout).await
    }

    /// POST a JSON body with a bearer token and decode the JSON reply.
    pub async fn post_json<B, T>(&self, url: &str, bearer: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", bearer))
            .json(body)
            .send()
            .await
            .map_err(|e| request_failed("POST", url, self.default_timeout, e))?;

        let response = check_response_status(response, url).await?;
        decode_json(response, url, self.default_timeout).await
    }
}

fn request_failed(
    method: &str,
    url: &str,
    timeout: Duration,
    err: reqwest::Error,
) -> ConnectionsError {
    if err.is_timeout() {
        return ConnectionsError::Timeout(timeout);
    }
    ConnectionsError::Network {
        message: format!("{} {} failed: {}", method, url, err),
        cause: Some(err.to_string()),
    }
}

async fn check_response_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let mut body = response.text().await.unwrap_or_default();
    if body.len() > ERROR_BODY_LIMIT {
        let mut cut = ERROR_BODY_LIMIT;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }

    Err(ConnectionsError::Upstream {
        service: extract_domain(url),
        message: format!("HTTP {}: {}", status, body),
        status_code: Some(status.as_u16()),
    })
}

async fn decode_json<T: DeserializeOwned>(
    response: Response,
    url: &str,
    timeout: Duration,
) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| request_failed("READ", url, timeout, e))?;
    serde_json::from_slice(&bytes).map_err(|e| ConnectionsError::Upstream {
        service: extract_domain(url),
        message: format!("Invalid JSON body: {}", e),
        status_code: None,
    })
}

/// Extract domain from a URL.
pub fn extract_domain(url: &str) -> String {
    url::Url::parse(url)
        .map(|u| u.host_str().unwrap_or("unknown").to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Join a base URL and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
