//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BACKEND_URL '{0}': expected http:// or https://")]
    InvalidBackendUrl(String),
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// Which browser origins may call the server cross-origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin of the auth/data backend, without trailing slash.
    pub backend_url: String,
    pub proxy_timeout: Duration,
    pub cors_origins: CorsOrigins,
}

impl ServerConfig {
    /// Build from process environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:5000`
    /// - `PROXY_TIMEOUT_SECS`: default 15
    /// - `CORS_ALLOWED_ORIGINS`: comma list; empty allows any origin
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let backend_url = non_blank(lookup("BACKEND_URL")).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(backend_url));
        }
        let backend_url = backend_url.trim_end_matches('/').to_owned();

        let proxy_timeout_secs = non_blank(lookup("PROXY_TIMEOUT_SECS"))
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_PROXY_TIMEOUT_SECS);

        let cors_origins = parse_origins(lookup("CORS_ALLOWED_ORIGINS").as_deref())?;

        Ok(Self { port, backend_url, proxy_timeout: Duration::from_secs(proxy_timeout_secs), cors_origins })
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_origins(raw: Option<&str>) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();
    if origins.is_empty() {
        return Ok(CorsOrigins::Any);
    }
    origins
        .into_iter()
        .map(|origin| HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_owned())))
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
