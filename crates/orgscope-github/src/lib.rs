//! # orgscope-github
//!
//! GitHub organization client for orgscope: memoized access to an
//! organization's metadata and public repositories, with license filtering.
//!
//! The client never talks to the network directly. It calls an injected
//! [`JsonFetcher`]; [`HttpFetcher`] is the production implementation and
//! [`CannedFetcher`] serves fixed payloads for tests and offline replay.
//!
//! # Security
//!
//! Authentication tokens are stored using `SecretString` which automatically
//! zeroizes memory when dropped, reducing credential exposure in memory dumps.

mod auth;
mod canned;
mod client;
mod error;
mod http;
mod nested;
mod traits;
mod types;

pub use auth::{Auth, DEFAULT_TOKEN_ENV};
pub use canned::CannedFetcher;
pub use client::GithubOrgClient;
pub use error::{Error, Result};
pub use http::HttpFetcher;
pub use nested::access_nested_map;
// Re-export SecretString for constructing Auth::Token
pub use secrecy::SecretString;
pub use traits::JsonFetcher;
pub use types::{OrgPayload, RepoSummary};
