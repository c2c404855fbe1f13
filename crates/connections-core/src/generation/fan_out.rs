//! Bounded, order-preserving fan-out over a board's categories.

use crate::Result;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;

/// Drive `calls` with at most `limit` of them in flight.
///
/// The futures must be lazy: none is polled before the stream reaches it.
/// Results come back in input order regardless of completion order. The
/// first error aborts the batch and drops the remaining in-flight calls.
/// A `limit` of 0 is treated as 1.
pub async fn generate_ordered<R, Fut>(calls: Vec<Fut>, limit: usize) -> Result<Vec<R>>
where
    Fut: Future<Output = Result<R>>,
{
    stream::iter(calls)
        .buffered(limit.max(1))
        .try_collect()
        .await
}
