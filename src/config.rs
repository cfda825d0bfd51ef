// Runtime configuration.
// Read from environment variables: FEED_URL, FEED_CACHE_DIR, FEED_USER_AGENT.

use std::path::PathBuf;

use reqwest::Url;

use crate::cache::paths;
use crate::error::ConfigError;
use crate::http::DEFAULT_USER_AGENT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: Url,
    pub cache_dir: Option<PathBuf>,
    pub user_agent: String,
}

impl Config {
    /// Create a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("FEED_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingFeedUrl)?;
        let feed_url = Url::parse(raw_url.trim()).map_err(|e| ConfigError::InvalidFeedUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;

        let cache_dir = lookup("FEED_CACHE_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let user_agent = lookup("FEED_USER_AGENT")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            feed_url,
            cache_dir,
            user_agent,
        })
    }

    /// Location of the cached feed file.
    pub fn feed_cache_path(&self) -> Option<PathBuf> {
        paths::feed_cache_path(self.cache_dir.as_deref())
    }
}
