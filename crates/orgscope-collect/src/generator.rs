//! Asynchronous producer of random numbers.

use std::time::Duration;

use futures::Stream;
use rand::Rng;

use crate::error::{Error, Result};

/// Parameters of a [`random_numbers`] stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberSource {
    /// Number of values produced before the stream ends.
    pub count: usize,

    /// Pause before each value.
    pub delay: Duration,

    /// Inclusive bounds; only set through [`NumberSource::with_range`],
    /// which keeps them finite and ordered.
    low: f64,
    high: f64,
}

impl NumberSource {
    /// Values produced by the default source.
    pub const DEFAULT_COUNT: usize = 10;

    /// Pause before each value of the default source.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    /// Same source with a different value count.
    #[must_use]
    pub const fn with_count(self, count: usize) -> Self {
        Self { count, ..self }
    }

    /// Same source with a different per-value delay.
    #[must_use]
    pub const fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Same source drawing from `[low, high]`.
    ///
    /// Bounds given in the wrong order are swapped.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if either bound is NaN or infinite,
    /// or if `high - low` overflows.
    pub fn with_range(self, low: f64, high: f64) -> Result<Self> {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        if !low.is_finite() || !high.is_finite() || !(high - low).is_finite() {
            return Err(Error::InvalidRange { low, high });
        }
        Ok(Self { low, high, ..self })
    }

    /// Inclusive lower bound of the produced values.
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Inclusive upper bound of the produced values.
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }
}

impl Default for NumberSource {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            delay: Self::DEFAULT_DELAY,
            low: 0.0,
            high: 10.0,
        }
    }
}

/// Stream of `source.count` uniformly distributed values.
///
/// Sleeps `source.delay` before producing each value. The stream is finite
/// and not restartable; call again for a new run.
pub fn random_numbers(source: NumberSource) -> impl Stream<Item = f64> {
    futures::stream::unfold(0usize, move |produced| async move {
        if produced >= source.count {
            return None;
        }

        tokio::time::sleep(source.delay).await;
        let value = rand::thread_rng().gen_range(source.low..=source.high);
        tracing::trace!(index = produced, value, "produced number");

        Some((value, produced + 1))
    })
}
