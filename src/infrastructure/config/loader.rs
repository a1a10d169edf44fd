use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use reqwest::Url;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Default project config file, read from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "github-proxy.yaml";

/// Prefix for structured environment overrides (`GITHUB_PROXY_SERVER__PORT`).
pub const ENV_PREFIX: &str = "GITHUB_PROXY_";

/// Plain environment variables accepted for compatibility with existing
/// deployments, mapped onto their config keys.
const LEGACY_ENV_KEYS: [(&str, &str); 3] = [
    ("USER_NAME", "github.account"),
    ("GITHUB_PRIVATE_TOKEN", "github.token"),
    ("PORT", "server.port"),
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GitHub token is not set (GITHUB_PRIVATE_TOKEN or GITHUB_PROXY_GITHUB__TOKEN)")]
    MissingToken,

    #[error("GitHub account is not set (USER_NAME or GITHUB_PROXY_GITHUB__ACCOUNT)")]
    MissingAccount,

    #[error("Invalid GitHub API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid {0}: must be at least 1 second")]
    InvalidTimeout(&'static str),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. YAML config file (`path`, or `github-proxy.yaml`; optional)
    /// 3. Legacy variables: `USER_NAME`, `GITHUB_PRIVATE_TOKEN`, `PORT`
    /// 4. Environment variables (`GITHUB_PROXY_*` prefix, `__` for nesting)
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let config: Config = Self::figment(path)
            .extract()
            .with_context(|| format!("Failed to load configuration (file: {})", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// The merged provider stack, before extraction.
    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(legacy_env())
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.github.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        if config.github.account.trim().is_empty() {
            return Err(ConfigError::MissingAccount);
        }

        if !matches!(Url::parse(&config.github.api_base_url), Ok(url) if !url.cannot_be_a_base()) {
            return Err(ConfigError::InvalidBaseUrl(
                config.github.api_base_url.clone(),
            ));
        }

        if config.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("timeout_secs"));
        }

        if config.github.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("connect_timeout_secs"));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}

fn legacy_env() -> Env {
    Env::raw().filter_map(|key| {
        LEGACY_ENV_KEYS
            .iter()
            .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
            .map(|(_, path)| (*path).into())
    })
}
