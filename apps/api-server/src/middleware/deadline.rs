// [apps/api-server/src/middleware/deadline.rs]
//! Per-request deadline enforcement (§5). A request that does not complete
//! within the configured window yields a `504`-class failure with a
//! generic body; no retry is attempted anywhere in this service (§7).

use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

pub async fn deadline_guard(State(state): State<AppState>, request: Request, next: Next) -> Result<Response, ApiError> {
    match tokio::time::timeout(state.settings.request_deadline, next.run(request)).await {
        Ok(response) => Ok(response),
        Err(_elapsed) => Err(ApiError::Timeout),
    }
}
