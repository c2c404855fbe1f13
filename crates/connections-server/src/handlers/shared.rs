//! Shared handler utilities used across routes.

use crate::error::ApiError;
use connections_core::{ConnectionsError, PuzzleDate};

/// Validate the `{date}` path segment.
pub(crate) fn parse_date(raw: &str) -> Result<PuzzleDate, ApiError> {
    Ok(PuzzleDate::parse(raw)?)
}

/// Fallback for date routes hit with an empty date segment.
pub async fn missing_date() -> ApiError {
    ConnectionsError::validation("date", "expected YYYY-MM-DD, got ''").into()
}
