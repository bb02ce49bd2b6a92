//! GitHub organization client.

use serde_json::Value;
use tokio::sync::OnceCell;

use crate::error::{Error, Result};
use crate::nested::access_nested_map;
use crate::traits::JsonFetcher;
use crate::types::{OrgPayload, RepoSummary};

/// Client for one GitHub organization.
///
/// Every value derived from a fetch is computed once and cached for the
/// lifetime of the client: reading [`org`](Self::org) or
/// [`repos_payload`](Self::repos_payload) repeatedly calls the fetcher only
/// on the first successful read. A failed fetch leaves the cache empty, so
/// the next read tries again.
pub struct GithubOrgClient<F> {
    org_name: String,
    api_url: String,
    fetcher: F,
    org: OnceCell<OrgPayload>,
    public_repos_url: OnceCell<String>,
    repos_payload: OnceCell<Vec<Value>>,
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a client for `org_name` against the public GitHub API.
    pub fn new(org_name: impl Into<String>, fetcher: F) -> Self {
        Self::with_api_url(org_name, fetcher, Self::DEFAULT_API_URL)
    }

    /// Create a client against a custom API URL (for GitHub Enterprise).
    pub fn with_api_url(
        org_name: impl Into<String>,
        fetcher: F,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            org_name: org_name.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            fetcher,
            org: OnceCell::new(),
            public_repos_url: OnceCell::new(),
            repos_payload: OnceCell::new(),
        }
    }

    /// Organization metadata, fetched on first access.
    ///
    /// # Errors
    /// Propagates fetch errors unchanged; returns [`Error::UnexpectedShape`]
    /// if the response is not a JSON object.
    pub async fn org(&self) -> Result<&OrgPayload> {
        if let Some(org) = self.org.get() {
            tracing::trace!(org = %self.org_name, "org payload cache hit");
            return Ok(org);
        }

        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                tracing::debug!(org = %self.org_name, %url, "fetching org payload");
                match self.fetcher.get_json(&url).await? {
                    Value::Object(map) => Ok(map),
                    _ => Err(Error::UnexpectedShape {
                        expected: "object",
                        context: url,
                    }),
                }
            })
            .await
    }

    /// URL listing the organization's public repositories.
    ///
    /// Equals the org payload's `repos_url` field.
    ///
    /// # Errors
    /// Propagates [`org`](Self::org) errors; returns [`Error::KeyNotFound`]
    /// if `repos_url` is missing and [`Error::UnexpectedShape`] if it is not
    /// a string.
    pub async fn public_repos_url(&self) -> Result<&str> {
        let url = self
            .public_repos_url
            .get_or_try_init(|| async {
                let org = self.org().await?;
                let repos_url = org
                    .get("repos_url")
                    .ok_or_else(|| Error::KeyNotFound("repos_url".into()))?;
                repos_url
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| Error::UnexpectedShape {
                        expected: "string",
                        context: "repos_url".into(),
                    })
            })
            .await?;

        Ok(url)
    }

    /// Raw repository list, fetched from [`public_repos_url`](Self::public_repos_url)
    /// on first access.
    ///
    /// # Errors
    /// Propagates fetch errors unchanged; returns [`Error::UnexpectedShape`]
    /// if the response is not a JSON array.
    pub async fn repos_payload(&self) -> Result<&[Value]> {
        if let Some(repos) = self.repos_payload.get() {
            tracing::trace!(org = %self.org_name, "repos payload cache hit");
            return Ok(repos);
        }

        let repos = self
            .repos_payload
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?;
                tracing::debug!(org = %self.org_name, url, "fetching repos payload");
                match self.fetcher.get_json(url).await? {
                    Value::Array(repos) => Ok(repos),
                    _ => Err(Error::UnexpectedShape {
                        expected: "array",
                        context: url.to_string(),
                    }),
                }
            })
            .await?;

        Ok(repos)
    }

    /// Names of the organization's public repositories, in payload order.
    ///
    /// With `license`, keeps only repositories whose `license.key` matches.
    ///
    /// # Errors
    /// Propagates [`repos_payload`](Self::repos_payload) errors; returns
    /// [`Error::KeyNotFound`] for an entry without a string `name`.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        self.repos_payload()
            .await?
            .iter()
            .filter(|repo| license.is_none_or(|key| Self::has_license(repo, key)))
            .map(|repo| {
                repo.get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| Error::KeyNotFound("name".into()))
            })
            .collect()
    }

    /// Public repositories as [`RepoSummary`] values, in payload order.
    ///
    /// # Errors
    /// Same as [`public_repos`](Self::public_repos).
    pub async fn repo_summaries(&self, license: Option<&str>) -> Result<Vec<RepoSummary>> {
        self.repos_payload()
            .await?
            .iter()
            .filter(|repo| license.is_none_or(|key| Self::has_license(repo, key)))
            .map(|repo| {
                RepoSummary::from_payload(repo).ok_or_else(|| Error::KeyNotFound("name".into()))
            })
            .collect()
    }
}

impl<F> GithubOrgClient<F> {
    /// The organization name this client was built for.
    #[must_use]
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// The injected fetcher.
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// URL of the organization resource.
    #[must_use]
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.api_url, self.org_name)
    }

    /// Whether `repo` is published under `license_key`.
    ///
    /// Pure predicate over the repo payload; needs no fetcher.
    /// Missing or null license data counts as no match.
    #[must_use]
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        access_nested_map(repo, &["license", "key"])
            .is_ok_and(|key| key.as_str() == Some(license_key))
    }
}

impl<F> std::fmt::Debug for GithubOrgClient<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubOrgClient")
            .field("org_name", &self.org_name)
            .field("api_url", &self.api_url)
            .field("org_cached", &self.org.initialized())
            .field("repos_cached", &self.repos_payload.initialized())
            .finish_non_exhaustive()
    }
}
