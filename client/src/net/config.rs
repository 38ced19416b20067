//! Build-time configuration for the browser auth client.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use storefront::config::ClientConfig;

/// Resolve the compile-time `STOREFRONT_*` variables baked into the bundle.
#[must_use]
pub fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(build_env)
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "STOREFRONT_API_BASE" => option_env!("STOREFRONT_API_BASE"),
        "STOREFRONT_TOKEN_KEY" => option_env!("STOREFRONT_TOKEN_KEY"),
        "STOREFRONT_REQUEST_TIMEOUT_MS" => option_env!("STOREFRONT_REQUEST_TIMEOUT_MS"),
        _ => None,
    };
    value.map(str::to_owned)
}
