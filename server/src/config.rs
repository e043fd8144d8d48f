//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GRAPHQL_UPSTREAM: &str = "https://apiproyectokruger.onrender.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The upstream URL is not an http(s) URL.
    #[error("GRAPHQL_UPSTREAM must start with http:// or https://, got {0:?}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Upstream API origin without a trailing slash.
    pub graphql_upstream: String,
    pub upstream_timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GRAPHQL_UPSTREAM`: default `https://apiproyectokruger.onrender.com`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let graphql_upstream = lookup("GRAPHQL_UPSTREAM")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_GRAPHQL_UPSTREAM.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(graphql_upstream.starts_with("http://") || graphql_upstream.starts_with("https://")) {
            return Err(ConfigError::UpstreamScheme(graphql_upstream));
        }

        let timeout_secs = parse_or("UPSTREAM_TIMEOUT_SECS", lookup("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        Ok(Self { port, graphql_upstream, upstream_timeout: Duration::from_secs(timeout_secs) })
    }

    /// Full URL of the upstream GraphQL endpoint.
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.graphql_upstream)
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}
