//! HTTP implementation of [`JsonFetcher`] backed by reqwest.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::auth::Auth;
use crate::error::{Error, Result};
use crate::traits::JsonFetcher;

/// Fetches JSON documents from the GitHub REST API.
pub struct HttpFetcher {
    client: Client,
    /// Token stored as `SecretString` for automatic zeroization on drop.
    token: Option<SecretString>,
}

impl HttpFetcher {
    /// Create a new fetcher.
    ///
    /// # Errors
    /// Returns error if the token cannot be resolved or the HTTP client
    /// cannot be built.
    pub fn new(auth: &Auth) -> Result<Self> {
        let token = auth.resolve()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("orgscope"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, token })
    }

    /// Whether requests carry a bearer token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Map a non-success response to an error.
    async fn error_for(response: reqwest::Response) -> Error {
        let status_code = response.status().as_u16();

        match status_code {
            401 => Error::AuthenticationFailed,
            403 if response
                .headers()
                .get("x-ratelimit-remaining")
                .is_some_and(|v| v == "0") =>
            {
                Error::RateLimited
            }
            404 => Error::NotFound(response.url().to_string()),
            _ => {
                let text = response.text().await.unwrap_or_default();
                Error::ApiError {
                    status: status_code,
                    message: text,
                }
            }
        }
    }
}

impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "GET");

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()));
        }
        let response = request.send().await?;

        if response.status().is_success() {
            let body = response.json().await?;
            return Ok(body);
        }

        Err(Self::error_for(response).await)
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}
