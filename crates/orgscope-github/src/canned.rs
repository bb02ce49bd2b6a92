//! A [`JsonFetcher`] that serves preconfigured payloads.
//!
//! Used as the test double for [`GithubOrgClient`](crate::GithubOrgClient)
//! and by the CLI's `--replay` mode. Every requested URL is recorded so
//! callers can assert how often, and with what, the fetcher was called.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::traits::JsonFetcher;

enum Responses {
    /// Same value for every call.
    Fixed(Value),
    /// One value per call, in call order.
    Sequence(Mutex<VecDeque<Value>>),
    /// Value looked up by exact URL.
    Routes(HashMap<String, Value>),
    /// Every call fails with an API error.
    Failure { status: u16, message: String },
}

/// Fetcher returning canned JSON instead of performing network I/O.
pub struct CannedFetcher {
    responses: Responses,
    calls: Mutex<Vec<String>>,
}

impl CannedFetcher {
    fn with(responses: Responses) -> Self {
        Self {
            responses,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Return `value` for every call.
    #[must_use]
    pub fn returning(value: Value) -> Self {
        Self::with(Responses::Fixed(value))
    }

    /// Return `values` one per call, in order.
    ///
    /// Calls past the end fail with [`Error::NoCannedResponse`].
    #[must_use]
    pub fn sequence(values: impl IntoIterator<Item = Value>) -> Self {
        Self::with(Responses::Sequence(Mutex::new(values.into_iter().collect())))
    }

    /// Serve each URL from `routes`.
    ///
    /// Unknown URLs fail with [`Error::NoCannedResponse`].
    #[must_use]
    pub fn routes(routes: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self::with(Responses::Routes(routes.into_iter().collect()))
    }

    /// Fail every call with [`Error::ApiError`].
    #[must_use]
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self::with(Responses::Failure {
            status,
            message: message.into(),
        })
    }

    /// URLs requested so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    /// Number of calls made so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    fn respond(&self, url: &str) -> Result<Value> {
        lock(&self.calls).push(url.to_string());

        match &self.responses {
            Responses::Fixed(value) => Ok(value.clone()),
            Responses::Sequence(queue) => lock(queue)
                .pop_front()
                .ok_or_else(|| Error::NoCannedResponse(url.to_string())),
            Responses::Routes(routes) => routes
                .get(url)
                .cloned()
                .ok_or_else(|| Error::NoCannedResponse(url.to_string())),
            Responses::Failure { status, message } => Err(Error::ApiError {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Lock a mutex, recovering the data if a panicking test poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl JsonFetcher for CannedFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "canned GET");
        self.respond(url)
    }
}
