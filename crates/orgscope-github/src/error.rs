//! Error types for orgscope-github.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching or reading organization data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication failed.
    #[error("GitHub authentication failed - check the configured API token")]
    AuthenticationFailed,

    /// Token not found in the configured environment variable.
    #[error("no GitHub token found in ${0}")]
    NoToken(String),

    /// API rate limit exceeded.
    #[error("GitHub API rate limit exceeded - wait and try again")]
    RateLimited,

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// API error with status code.
    #[error("GitHub API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse GitHub response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A key along a nested lookup path was missing.
    #[error("key not found: '{0}'")]
    KeyNotFound(String),

    /// A payload did not have the expected JSON shape.
    #[error("unexpected payload for {context}: expected {expected}")]
    UnexpectedShape {
        expected: &'static str,
        context: String,
    },

    /// A canned fetcher had nothing configured for the requested URL.
    #[error("no canned response for {0}")]
    NoCannedResponse(String),
}
