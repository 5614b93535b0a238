// [apps/api-server/src/routes.rs]
//! Route registration (§4.5). Static prefixes are registered before dynamic
//! captures on overlapping paths — in particular `/suppliers/ranking` is
//! wired before `/suppliers/:id`, so a literal "ranking" path segment is
//! never swallowed by the `:id` capture. Middleware is layered outside-in:
//! security headers wrap everything including `/api/healthz`, the rate
//! limiter sits before CORS and before the routes themselves (§4.6), and the
//! per-request deadline wraps the innermost router so it only bounds the
//! handler's own work. `/api/healthz` is mounted outside that stack
//! entirely — a liveness probe must not be rate-limited or deadlined.

use crate::handlers::{alerts, contracts, orgs, stats, suppliers};
use crate::middleware::{deadline_guard, rate_limit_guard, security_headers};
use crate::state::AppState;
use axum::http::{Method, StatusCode};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.settings.cors_allowed_origins.clone())
        .allow_methods([Method::GET]);

    let suppliers_routes = Router::new()
        // Static prefix first: would otherwise be shadowed by `:id` below.
        .route("/suppliers/ranking", get(suppliers::get_ranking))
        .route("/suppliers/:id", get(suppliers::get_dossier))
        .route("/suppliers/:id/graph", get(suppliers::get_graph))
        .route("/suppliers/:id/export", get(suppliers::get_export));

    let api = Router::new()
        .merge(suppliers_routes)
        .route("/alerts", get(alerts::get_feed))
        .route("/alerts/:kind", get(alerts::get_feed_by_kind))
        .route("/search", get(suppliers::get_search))
        .route("/contracts", get(contracts::get_contracts))
        .route("/orgs/:org_code/dashboard", get(orgs::get_dashboard))
        .route("/stats", get(stats::get_stats))
        .layer(middleware::from_fn_with_state(state.clone(), deadline_guard))
        .layer(cors)
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit_guard));

    // Unauthenticated and unrated: a liveness probe has to answer even when
    // the rate limiter or the store itself is under pressure.
    Router::new()
        .route("/api/healthz", get(healthz))
        .nest("/api", api)
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Wraps the router so `ConnectInfo<SocketAddr>` (required by the rate
/// limiter) is populated from the accepted TCP peer address.
pub fn into_make_service(router: Router) -> axum::extract::connect_info::IntoMakeServiceWithConnectInfo<Router, SocketAddr> {
    router.into_make_service_with_connect_info::<SocketAddr>()
}
