//! Passthrough proxy for the upstream `/svc` API.
//!
//! Lets the browser reach the upstream puzzle service through this server's
//! CORS policy. Status, content type and body are relayed as-is.

use crate::error::ApiError;
use crate::server::AppState;
use axum::body::Body;
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use connections_core::config::UpstreamConfig;
use connections_core::network::join_url;
use std::sync::Arc;
use tracing::debug;

/// `GET /svc/{*path}`.
pub async fn svc_proxy(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let mut url = join_url(
        &state.upstream_base_url,
        &format!("{}/{}", UpstreamConfig::SVC_PREFIX, path),
    );
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(&query);
    }
    debug!("Proxying GET {}", url);

    let upstream = state
        .proxy_client
        .get_raw(&url)
        .await
        .map_err(|e| ApiError::BadGateway(e.to_string()))?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ApiError::BadGateway(e.to_string()))?;

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(bytes))
        .map_err(|e| ApiError::BadGateway(e.to_string()))
}
