//! Client configuration, environment-driven in the `RESULTGRID_*` namespace.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Settings for talking to the analytics API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `https://analytics.example.com`.
    pub base_url: String,
    /// Bearer token sent with every request when set.
    pub token: Option<String>,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Delay between polls while a result is still being computed (202).
    pub poll_delay: Duration,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    resultgrid_base_url: Option<String>,
    #[serde(default)]
    resultgrid_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    resultgrid_request_timeout_secs: u64,
    #[serde(default = "default_poll_delay_ms")]
    resultgrid_poll_delay_ms: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_poll_delay_ms() -> u64 {
    500
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            request_timeout: Duration::from_secs(default_timeout_secs()),
            poll_delay: Duration::from_millis(default_poll_delay_ms()),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn from_env() -> Result<Self> {
        let raw: RawConfig = envy::from_env().map_err(|err| {
            Error::Config(format!(
                "failed to parse RESULTGRID_* environment variables: {err}"
            ))
        })?;

        let base_url = raw
            .resultgrid_base_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::Config("RESULTGRID_BASE_URL is required".into()))?;

        Ok(Self {
            base_url,
            token: raw.resultgrid_token,
            request_timeout: Duration::from_secs(raw.resultgrid_request_timeout_secs),
            poll_delay: Duration::from_millis(raw.resultgrid_poll_delay_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_defaults() {
        let config = ClientConfig::new("https://analytics.example.com").with_token("secret");

        assert_eq!(config.base_url, "https://analytics.example.com");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.poll_delay, Duration::from_millis(500));
    }
}
