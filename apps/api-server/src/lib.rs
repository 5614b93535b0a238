// [apps/api-server/src/lib.rs]
//! HTTP surface for the supplier risk dossier service (§4.5-§4.7). The
//! binary in `main.rs` is a thin shell: it reads configuration, bootstraps
//! `AppState`, builds the router and serves it. Everything that can be
//! exercised without a socket lives here so integration tests can build a
//! router directly with `tower::ServiceExt::oneshot`.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use config::Settings;
pub use routes::build_router;
pub use state::AppState;
