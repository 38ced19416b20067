use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
    assert_eq!(cfg.cors_origins, CorsOrigins::Any);
}

#[test]
fn explicit_values_are_used() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.example.com/"),
        ("PROXY_TIMEOUT_SECS", "30"),
        ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://shop.example.com"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.com");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(30));
    assert_eq!(
        cfg.cors_origins,
        CorsOrigins::List(vec![
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("https://shop.example.com"),
        ])
    );
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
}

#[test]
fn backend_url_needs_http_scheme() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:5000")])),
        Err(ConfigError::InvalidBackendUrl("localhost:5000".to_owned()))
    );
}

#[test]
fn bad_timeout_falls_back_to_default() {
    for raw in ["0", "soon", ""] {
        let cfg = ServerConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", raw)])).unwrap();
        assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
    }
}

#[test]
fn blank_origin_list_allows_any() {
    let cfg = ServerConfig::from_lookup(lookup(&[("CORS_ALLOWED_ORIGINS", " , ")])).unwrap();
    assert_eq!(cfg.cors_origins, CorsOrigins::Any);
}

#[test]
fn origin_with_control_character_is_rejected() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("CORS_ALLOWED_ORIGINS", "http://a.test\u{7}")])),
        Err(ConfigError::InvalidOrigin("http://a.test\u{7}".to_owned()))
    );
}
