//! Network utilities for HTTP operations.
//!
//! No retries or circuit breaking: a failed call fails the request that
//! triggered it.

mod client;

pub use client::{extract_domain, join_url, HttpClient};

#[cfg(test)]
pub(crate) mod test_server;
