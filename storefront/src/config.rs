//! Auth-client configuration shared by the browser and CLI adapters.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the auth API, without trailing slash. Empty means same-origin.
    pub api_base: String,
    /// Storage key holding the persisted access token.
    pub token_key: String,
    /// Upper bound on a single auth call.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Build from a key lookup (process env, compile-time env, test map).
    ///
    /// - `STOREFRONT_API_BASE`: default same-origin
    /// - `STOREFRONT_TOKEN_KEY`: default `token`
    /// - `STOREFRONT_REQUEST_TIMEOUT_MS`: default 15000; unparsable or zero
    ///   values fall back to the default
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_base = lookup("STOREFRONT_API_BASE")
            .map(|base| base.trim().trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base);
        let token_key = lookup("STOREFRONT_TOKEN_KEY")
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .unwrap_or(defaults.token_key);
        let request_timeout = lookup("STOREFRONT_REQUEST_TIMEOUT_MS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map_or(defaults.request_timeout, Duration::from_millis);

        Self { api_base, token_key, request_timeout }
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}
