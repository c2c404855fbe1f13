//! Error types for the Connections backend.
//!
//! Every failure the library can produce is a [`ConnectionsError`]. The HTTP
//! layer only needs to know which [`ErrorClass`] a failure belongs to in order
//! to pick a status code; the variant itself carries the detail for logging.

use std::time::Duration;
use thiserror::Error;

/// Main error type for the Connections library.
#[derive(Debug, Error)]
pub enum ConnectionsError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    // Upstream puzzle service errors
    #[error("Upstream error from {service}: {message}")]
    Upstream {
        service: String,
        message: String,
        status_code: Option<u16>,
    },

    // Generative AI errors
    #[error("{kind} generation failed: {message}")]
    Generation {
        kind: GenerationKind,
        message: String,
    },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Cache errors
    #[error("No puzzle cached for {date}")]
    PuzzleNotCached { date: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Which enrichment generator produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    PickupLines,
    Image,
}

impl std::fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationKind::PickupLines => write!(f, "Pickup line"),
            GenerationKind::Image => write!(f, "Image"),
        }
    }
}

/// Coarse classification used at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Malformed client input (400).
    Validation,
    /// The requested resource is not available yet (404).
    NotFound,
    /// Any failure talking to, or parsing output from, an external service (500).
    Upstream,
}

/// Result type alias for Connections operations.
pub type Result<T> = std::result::Result<T, ConnectionsError>;

impl ConnectionsError {
    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConnectionsError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a generation error.
    pub fn generation(kind: GenerationKind, message: impl Into<String>) -> Self {
        ConnectionsError::Generation {
            kind,
            message: message.into(),
        }
    }

    /// Classify this error for the HTTP boundary.
    pub fn class(&self) -> ErrorClass {
        match self {
            ConnectionsError::Validation { .. } => ErrorClass::Validation,
            ConnectionsError::PuzzleNotCached { .. } => ErrorClass::NotFound,
            // Missing API keys, bad JSON and network failures all surface as
            // a failed upstream call from the client's point of view.
            _ => ErrorClass::Upstream,
        }
    }
}
