//! Measuring concurrent collection runs.

use std::time::Duration;

use futures::future::join_all;
use tokio::time::Instant;

use crate::comprehension::async_comprehension_with;
use crate::generator::NumberSource;

/// Number of concurrent runs used by [`measure_runtime`].
pub const DEFAULT_PARALLEL: usize = 4;

/// Run [`DEFAULT_PARALLEL`] default collections concurrently and return the
/// total elapsed time.
///
/// The runs overlap, so this takes about as long as a single run.
pub async fn measure_runtime() -> Duration {
    measure_runtime_with(DEFAULT_PARALLEL, NumberSource::default()).await
}

/// Run `parallel` collections over `source` concurrently and return the
/// total elapsed time.
pub async fn measure_runtime_with(parallel: usize, source: NumberSource) -> Duration {
    let start = Instant::now();

    let runs = join_all((0..parallel).map(|_| async_comprehension_with(source))).await;

    let elapsed = start.elapsed();
    tracing::debug!(
        parallel,
        collected = runs.iter().map(Vec::len).sum::<usize>(),
        ?elapsed,
        "measured runtime"
    );
    elapsed
}
