//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `POSTWATCH_API_URL`: base URL of the remote auth/monitor API handed to
//!   the browser (default [`client::config::DEFAULT_API_URL`])
//! - `PORT`: listen port, default 3000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{ApiConfig, DEFAULT_API_URL};
use thiserror::Error;
use url::Url;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("POSTWATCH_API_URL must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub api: ApiConfig,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a malformed API URL or port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api = parse_api_url(lookup("POSTWATCH_API_URL").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        Ok(Self { api, port })
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<ApiConfig, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    let valid = Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host());
    if !valid {
        return Err(ConfigError::InvalidApiUrl(raw.to_owned()));
    }
    Ok(ApiConfig::new(raw))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
