//! Configuration management for orgscope.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use orgscope_collect::NumberSource;
use serde::{Deserialize, Serialize};

/// Config file looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "orgscope.toml";

/// orgscope configuration loaded from `orgscope.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub-specific settings.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Number collection settings.
    #[serde(default)]
    pub collect: CollectConfig,
}

impl Config {
    /// Load config from a TOML file.
    ///
    /// A missing file yields the default config.
    ///
    /// # Errors
    /// Returns error if the file exists but can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}

/// GitHub-specific settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Custom API URL for GitHub Enterprise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Environment variable holding the API token (default `GITHUB_TOKEN`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,
}

/// Settings for `random` and `runtime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Values per collection.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Delay before each value, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Lower bound of generated values.
    #[serde(default)]
    pub low: f64,

    /// Upper bound of generated values.
    #[serde(default = "default_high")]
    pub high: f64,

    /// Concurrent collections for `runtime`.
    #[serde(default = "default_parallel")]
    pub parallel: usize,
}

impl CollectConfig {
    /// Number source described by these settings.
    ///
    /// # Errors
    /// Returns error if `low`/`high` do not form a usable range.
    pub fn source(&self) -> Result<NumberSource> {
        NumberSource::default()
            .with_count(self.count)
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_range(self.low, self.high)
            .context("Invalid [collect] range in config")
    }
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            delay_ms: default_delay_ms(),
            low: 0.0,
            high: default_high(),
            parallel: default_parallel(),
        }
    }
}

const fn default_count() -> usize {
    NumberSource::DEFAULT_COUNT
}

const fn default_delay_ms() -> u64 {
    1000
}

const fn default_high() -> f64 {
    10.0
}

const fn default_parallel() -> usize {
    orgscope_collect::DEFAULT_PARALLEL
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.github.api_url.is_none());
        assert_eq!(config.collect.count, 10);
        assert_eq!(config.collect.delay_ms, 1000);
        assert_eq!(config.collect.parallel, 4);
        assert_eq!(config.collect.source().unwrap(), NumberSource::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("orgscope.toml");
        fs::write(
            &path,
            r#"
[github]
api_url = "https://github.example.com/api/v3"

[collect]
count = 3
delay_ms = 0
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(
            config.github.api_url.as_deref(),
            Some("https://github.example.com/api/v3")
        );
        assert!(config.github.token_env.is_none());
        assert_eq!(config.collect.count, 3);
        assert_eq!(config.collect.delay_ms, 0);
        assert_eq!(config.collect.parallel, 4);
        assert_eq!(config.collect.source().unwrap().delay, Duration::ZERO);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("orgscope.toml");
        fs::write(&path, "[collect]\ncount = \"many\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_non_finite_range_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("orgscope.toml");

        for collect in ["high = inf", "low = nan", "low = -1.7e308\nhigh = 1.7e308"] {
            fs::write(&path, format!("[collect]\n{collect}\n")).unwrap();

            let config = Config::load(&path).unwrap();
            let err = config.collect.source().unwrap_err();

            assert!(
                format!("{err:#}").contains("invalid range"),
                "{collect}: {err:#}"
            );
        }
    }

    #[test]
    fn test_missing_config_returns_default() {
        let config = Config::load("/nonexistent/path/orgscope.toml").unwrap();
        assert_eq!(config.collect.count, 10);
    }
}
