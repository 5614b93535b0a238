// [apps/api-server/src/handlers/stats.rs]
use crate::errors::ApiError;
use crate::services::stats;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rollup = stats::rollup(&state).await?;
    Ok(Json(rollup))
}
