// [apps/api-server/tests/routes_tests.rs]
//! Drives the built router with `tower::ServiceExt::oneshot`, the way the
//! teacher's own orchestrator route tests avoid binding a real socket.
//! Covers route ordering (`/suppliers/ranking` vs `/suppliers/:id`), the
//! unauthenticated health probe, and §7's status-code mapping for a
//! malformed identifier.

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use sentinel_api_server::{build_router, AppState, Settings};
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceExt;

/// The rate-limit middleware extracts `ConnectInfo<SocketAddr>`, normally
/// populated by `into_make_service_with_connect_info` on a bound listener.
/// `oneshot` tests bypass that listener, so the extension is inserted by
/// hand on every request built here.
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .extension(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 0))))
        .body(Body::empty())
        .unwrap()
}

async fn test_state() -> AppState {
    test_state_with_rate_cap(0).await
}

async fn test_state_with_rate_cap(rate_limit_cap: u32) -> AppState {
    let settings = Settings {
        store_path: ":memory:".to_string(),
        read_only: true,
        rate_limit_cap,
        rate_limit_window: Duration::from_secs(60),
        cors_allowed_origins: Vec::new(),
        request_deadline: Duration::from_secs(5),
        disclaimer: "test disclaimer".to_string(),
        bypass_key_header: "x-bypass-key".to_string(),
        port: 0,
    };
    AppState::bootstrap(settings).await.expect("in-memory store bootstraps")
}

#[tokio::test]
async fn healthz_bypasses_everything_and_returns_ok() {
    let router = build_router(test_state().await);
    let response = router.oneshot(get("/api/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn ranking_route_is_not_shadowed_by_the_supplier_id_capture() {
    let router = build_router(test_state().await);
    let response = router.oneshot(get("/api/suppliers/ranking")).await.unwrap();
    // An empty store yields an empty ranking page, not a 422/404 that a
    // misrouted "ranking" treated as a `:id` capture would produce.
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_supplier_id_is_rejected_as_unprocessable() {
    let router = build_router(test_state().await);
    let response = router.oneshot(get("/api/suppliers/not-a-cnpj")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn well_formed_but_absent_supplier_id_is_not_found() {
    let router = build_router(test_state().await);
    let response = router.oneshot(get("/api/suppliers/11444777000161")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn security_headers_are_present_even_on_error_responses() {
    let router = build_router(test_state().await);
    let response = router.oneshot(get("/api/suppliers/not-a-cnpj")).await.unwrap();
    assert!(response.headers().contains_key("x-content-type-options"));
}

#[tokio::test]
async fn request_past_the_rate_limit_cap_is_rejected() {
    let router = build_router(test_state_with_rate_cap(2).await);

    for _ in 0..2 {
        let response = router.clone().oneshot(get("/api/stats")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response = router.clone().oneshot(get("/api/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn bypass_key_header_disables_the_limiter_for_that_request() {
    let router = build_router(test_state_with_rate_cap(1).await);

    // The cap alone would reject everything past the first request.
    let blocked = router.clone().oneshot(get("/api/stats")).await.unwrap();
    assert_eq!(blocked.status(), StatusCode::OK);
    let blocked = router.clone().oneshot(get("/api/stats")).await.unwrap();
    assert_eq!(blocked.status(), StatusCode::TOO_MANY_REQUESTS);

    // A non-empty bypass key bypasses the bucket entirely, repeatedly.
    for _ in 0..5 {
        let request = Request::builder()
            .uri("/api/stats")
            .header("x-bypass-key", "anything-non-empty")
            .extension(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 0))))
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
