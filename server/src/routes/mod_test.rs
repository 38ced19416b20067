use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

fn test_state() -> AppState {
    let config = ServerConfig::from_lookup(|key| match key {
        "BACKEND_URL" => Some("http://127.0.0.1:9".to_owned()),
        "PROXY_TIMEOUT_SECS" => Some("1".to_owned()),
        _ => None,
    })
    .unwrap();
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = api_routes(test_state())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let response = api_routes(test_state())
        .oneshot(Request::builder().uri("/api/auth/profile").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(
        matches!(response.status(), StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT),
        "{}",
        response.status()
    );
}

#[test]
fn unserved_pages_lists_missing_paths() {
    let served = ["/", "/login", "/register", "/textbooks", "/cart", "/orders", "/profile"];
    assert_eq!(unserved_pages(served), vec!["/admin"]);
}

#[test]
fn unserved_pages_empty_when_all_served() {
    assert!(unserved_pages(ROUTES.iter().map(|route| route.path)).is_empty());
}
