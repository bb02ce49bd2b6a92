//! Trait abstraction for fetching JSON documents.
//!
//! `JsonFetcher` is the single external collaborator of
//! [`GithubOrgClient`](crate::GithubOrgClient). Injecting it through the
//! constructor lets tests substitute a [`CannedFetcher`](crate::CannedFetcher)
//! and lets the CLI replay recorded payloads offline.

use serde_json::Value;

use crate::Result;

/// Fetch a URL and decode its body as JSON.
pub trait JsonFetcher: Send + Sync {
    /// Get the JSON document at `url`.
    ///
    /// Implementations report failures through [`crate::Error`]; callers
    /// propagate them unchanged.
    fn get_json(&self, url: &str) -> impl std::future::Future<Output = Result<Value>> + Send;
}

/// Borrowed fetchers, so a caller can keep inspecting a test double it lent out.
impl<T: JsonFetcher> JsonFetcher for &T {
    fn get_json(&self, url: &str) -> impl std::future::Future<Output = Result<Value>> + Send {
        (**self).get_json(url)
    }
}
