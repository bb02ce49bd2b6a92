use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use orgscope_github::{Auth, CannedFetcher, GithubOrgClient, HttpFetcher, JsonFetcher};
use serde_json::Value;

use crate::config::Config;

/// Fetcher chosen at startup: the live API or a replay file.
pub enum Fetcher {
    Http(HttpFetcher),
    Replay(CannedFetcher),
}

impl JsonFetcher for Fetcher {
    async fn get_json(&self, url: &str) -> orgscope_github::Result<Value> {
        match self {
            Self::Http(f) => f.get_json(url).await,
            Self::Replay(f) => f.get_json(url).await,
        }
    }
}

/// Build the fetcher for this invocation.
pub fn build_fetcher(config: &Config, replay: Option<&Path>) -> Result<Fetcher> {
    if let Some(path) = replay {
        tracing::debug!(path = %path.display(), "serving requests from replay file");
        return Ok(Fetcher::Replay(load_replay(path)?));
    }

    let auth = config
        .github
        .token_env
        .as_deref()
        .map_or_else(Auth::auto, Auth::from_env_or_anonymous);
    let fetcher = HttpFetcher::new(&auth).context("Failed to set up GitHub client")?;
    tracing::debug!(authenticated = fetcher.is_authenticated(), "using GitHub API");
    Ok(Fetcher::Http(fetcher))
}

/// Build an org client using the configured API URL.
pub fn org_client(
    name: &str,
    config: &Config,
    replay: Option<&Path>,
) -> Result<GithubOrgClient<Fetcher>> {
    let fetcher = build_fetcher(config, replay)?;
    Ok(match &config.github.api_url {
        Some(url) => GithubOrgClient::with_api_url(name, fetcher, url.as_str()),
        None => GithubOrgClient::new(name, fetcher),
    })
}

/// Load a replay file: a JSON object mapping request URLs to payloads.
fn load_replay(path: &Path) -> Result<CannedFetcher> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay file {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in replay file {}", path.display()))?;

    let Value::Object(routes) = value else {
        bail!(
            "Replay file {} must be a JSON object mapping URLs to payloads",
            path.display()
        );
    };

    Ok(CannedFetcher::routes(routes))
}

/// Build a current-thread runtime for one command.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
