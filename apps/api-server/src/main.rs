// [apps/api-server/src/main.rs]
//! Process entry point. Loads `.env`, initializes telemetry, opens the
//! analytical store read-only exactly once (§5), wires repositories and
//! services into `AppState`, and serves the router until the process
//! receives a termination signal.

use sentinel_api_server::{build_router, AppState, Settings};
use sentinel_shared_telemetry::init_tracing;
use std::net::SocketAddr;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing("sentinel_api_server");

    let settings = Settings::from_env();
    let port = settings.port;

    let state = match AppState::bootstrap(settings).await {
        Ok(state) => state,
        Err(err) => {
            error!("❌ [BOOTSTRAP_FAILED]: Analytical store did not open: {}", err);
            std::process::exit(1);
        }
    };

    let router = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("🛰️  [COMMAND_CENTER]: sentinel-api listening on {}", addr);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, %addr, "failed to bind listener");
            std::process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, sentinel_api_server::routes::into_make_service(router))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %err, "server exited with an error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received, draining in-flight requests");
}
