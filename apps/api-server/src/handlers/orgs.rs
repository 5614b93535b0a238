// [apps/api-server/src/handlers/orgs.rs]
use crate::errors::ApiError;
use crate::services::org_dashboard;
use crate::state::AppState;
use crate::validation::validate_org_code;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn get_dashboard(State(state): State<AppState>, Path(org_code): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let org_code = validate_org_code(&org_code)?;
    let Some(dashboard) = org_dashboard::dashboard_for(&state, org_code).await? else {
        return Err(ApiError::NotFound);
    };
    Ok(Json(dashboard))
}
