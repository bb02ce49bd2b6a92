//! Error types for orgscope-collect.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a number source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Bounds are not finite, or the span between them overflows.
    #[error("invalid range [{low}, {high}]: bounds must be finite and their span representable")]
    InvalidRange { low: f64, high: f64 },
}
