// [apps/api-server/src/config.rs]
//! Boot-time settings, read once and injected everywhere (§6 of spec.md:
//! "all configuration is injected; there is no process-global mutable state
//! apart from the rate-limit bucket map").

use axum::http::HeaderValue;
use std::time::Duration;

const DEFAULT_DISCLAIMER: &str = "This dossier is assembled from public-interest open data and does not \
constitute a legal or administrative finding. Absence of an alert is not proof of good standing.";

#[derive(Clone)]
pub struct Settings {
    pub store_path: String,
    pub read_only: bool,
    pub rate_limit_cap: u32,
    pub rate_limit_window: Duration,
    pub cors_allowed_origins: Vec<HeaderValue>,
    pub request_deadline: Duration,
    pub disclaimer: String,
    pub bypass_key_header: String,
    pub port: u16,
}

impl Settings {
    /// Reads `.env` (if present) then the process environment. Panics with a
    /// descriptive message on a missing required variable, the way the
    /// teacher's `main.rs` treats `DATABASE_URL` as non-negotiable.
    pub fn from_env() -> Self {
        let store_path = std::env::var("STORE_PATH").expect("STORE_PATH must be set to the analytical store file path");

        let rate_limit_cap: u32 = std::env::var("RATE_LIMIT_CAP")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(60);

        let rate_limit_window_secs: u64 = std::env::var("RATE_LIMIT_WINDOW_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(60);

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        let request_deadline_secs: u64 = std::env::var("REQUEST_DEADLINE_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(10);

        let disclaimer = std::env::var("DISCLAIMER_TEXT").unwrap_or_else(|_| DEFAULT_DISCLAIMER.to_string());

        let bypass_key_header = std::env::var("BYPASS_KEY_HEADER").unwrap_or_else(|_| "x-bypass-key".to_string());

        let port: u16 = std::env::var("PORT").ok().and_then(|raw| raw.parse().ok()).unwrap_or(8080);

        Self {
            store_path,
            read_only: true,
            rate_limit_cap,
            rate_limit_window: Duration::from_secs(rate_limit_window_secs),
            cors_allowed_origins,
            request_deadline: Duration::from_secs(request_deadline_secs),
            disclaimer,
            bypass_key_header,
            port,
        }
    }
}
