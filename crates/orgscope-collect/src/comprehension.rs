//! Draining asynchronous sequences into ordered lists.

use futures::{Stream, StreamExt, TryStream, TryStreamExt};

use crate::generator::{NumberSource, random_numbers};

/// Collect every item of `stream`, in the order it was produced.
///
/// Suspends once per item while awaiting the next value.
pub async fn collect_numbers<S>(stream: S) -> Vec<S::Item>
where
    S: Stream,
{
    stream.collect().await
}

/// Collect a fallible stream, stopping at the first error.
///
/// # Errors
/// Returns the stream's first error unchanged.
pub async fn try_collect_numbers<S>(stream: S) -> Result<Vec<S::Ok>, S::Error>
where
    S: TryStream,
{
    stream.try_collect().await
}

/// Collect ten random numbers from the default source.
pub async fn async_comprehension() -> Vec<f64> {
    async_comprehension_with(NumberSource::default()).await
}

/// Collect every number produced by `source`.
pub async fn async_comprehension_with(source: NumberSource) -> Vec<f64> {
    let numbers = collect_numbers(random_numbers(source)).await;
    tracing::debug!(count = numbers.len(), "collected numbers");
    numbers
}
