// [apps/api-server/src/middleware/rate_limit.rs]
//! In-memory sliding-window rate limiter (§4.6). The bucket map is the only
//! mutable shared state in this service (§5); a single mutex serializes
//! eviction and insertion in the same critical section, per §5's
//! single-writer discipline.

use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{instrument, warn};

pub struct RateLimiter {
    cap: u32,
    window: Duration,
    buckets: Mutex<HashMap<IpAddr, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(cap: u32, window: Duration) -> Self {
        Self { cap, window, buckets: Mutex::new(HashMap::new()) }
    }

    /// Evicts timestamps older than the window, then counts-and-inserts if
    /// under the cap. `cap == 0` disables the limiter entirely (used in
    /// tests). Returns `true` when the request is allowed.
    #[instrument(skip(self))]
    fn allow(&self, client: IpAddr, now: Instant) -> bool {
        if self.cap == 0 {
            return true;
        }

        let mut buckets = self.buckets.lock().expect("rate limiter mutex poisoned");
        let timestamps = buckets.entry(client).or_default();
        timestamps.retain(|seen| now.duration_since(*seen) < self.window);

        if timestamps.len() as u32 >= self.cap {
            false
        } else {
            timestamps.push(now);
            true
        }
    }
}

/// Mounted before CORS and before route registration (§4.6). A non-empty
/// bypass-key header disables the limiter for that one request; its
/// presence alone is the bypass signal (§4.6, §6 glossary).
pub async fn rate_limit_guard(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let bypassed = request
        .headers()
        .get(&state.settings.bypass_key_header)
        .map(|value| !value.is_empty())
        .unwrap_or(false);

    if bypassed {
        return Ok(next.run(request).await);
    }

    if state.rate_limiter.allow(addr.ip(), Instant::now()) {
        Ok(next.run(request).await)
    } else {
        warn!("⛔ [RATE_LIMIT]: Client {} exceeded the request cap.", addr.ip());
        Err(ApiError::RateLimited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn client() -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
    }

    #[test]
    fn allows_requests_under_the_cap() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.allow(client(), now));
        assert!(limiter.allow(client(), now));
        assert!(limiter.allow(client(), now));
    }

    #[test]
    fn rejects_the_request_past_the_cap() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.allow(client(), now));
        assert!(limiter.allow(client(), now));
        assert!(limiter.allow(client(), now));
        assert!(!limiter.allow(client(), now));
    }

    #[test]
    fn cap_zero_disables_the_limiter_entirely() {
        let limiter = RateLimiter::new(0, Duration::from_secs(60));
        let now = Instant::now();
        for _ in 0..200 {
            assert!(limiter.allow(client(), now));
        }
    }

    #[test]
    fn eviction_is_monotone_after_the_window_elapses() {
        let limiter = RateLimiter::new(1, Duration::from_millis(50));
        let first = Instant::now();
        assert!(limiter.allow(client(), first));
        assert!(!limiter.allow(client(), first));

        let later = first + Duration::from_millis(60);
        assert!(limiter.allow(client(), later));

        let buckets = limiter.buckets.lock().unwrap();
        let timestamps = &buckets[&client()];
        assert!(timestamps.iter().all(|seen| later.duration_since(*seen) < limiter.window));
    }

    #[test]
    fn distinct_clients_have_independent_buckets() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();
        let other = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2));

        assert!(limiter.allow(client(), now));
        assert!(!limiter.allow(client(), now));
        assert!(limiter.allow(other, now));
    }
}
