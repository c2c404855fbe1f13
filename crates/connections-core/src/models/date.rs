//! Validated puzzle dates.

use crate::error::{ConnectionsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date regex must compile"));

/// A `YYYY-MM-DD` date string identifying one daily puzzle.
///
/// Only the shape is checked. The upstream service is the authority on
/// whether a puzzle exists for the date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PuzzleDate(String);

impl PuzzleDate {
    /// Validate and wrap a date string.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if DATE_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(ConnectionsError::validation(
                "date",
                format!("expected YYYY-MM-DD, got '{}'", value),
            ))
        }
    }

    /// Wrap a literal known to be well-formed.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(DATE_RE.is_match(value));
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PuzzleDate {
    type Error = ConnectionsError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<PuzzleDate> for String {
    fn from(date: PuzzleDate) -> Self {
        date.0
    }
}

impl std::str::FromStr for PuzzleDate {
    type Err = ConnectionsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
