// [apps/api-server/src/handlers/alerts.rs]
use crate::errors::ApiError;
use crate::handlers::suppliers::PageParams;
use crate::services::alerts_feed;
use crate::state::AppState;
use crate::validation::{parse_alert_kind, validate_pagination};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn get_feed(State(state): State<AppState>, Query(page): Query<PageParams>) -> Result<impl IntoResponse, ApiError> {
    let (limit, offset) = validate_pagination(page.limit, page.offset)?;
    let items = alerts_feed::feed(&state, limit, offset).await?;
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn get_feed_by_kind(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = parse_alert_kind(&kind)?;
    let (limit, offset) = validate_pagination(page.limit, page.offset)?;
    let items = alerts_feed::feed_by_kind(&state, kind, limit, offset).await?;
    Ok(Json(items))
}
