// [apps/api-server/src/handlers/contracts.rs]
use crate::errors::ApiError;
use crate::state::AppState;
use crate::validation::validate_pagination;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use sentinel_infra_store::ContractFilter;
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct ContractsParams {
    pub id: Option<String>,
    #[serde(rename = "orgCode")]
    pub org_code: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[instrument(skip(state))]
pub async fn get_contracts(State(state): State<AppState>, Query(params): Query<ContractsParams>) -> Result<impl IntoResponse, ApiError> {
    let (limit, offset) = validate_pagination(params.limit, params.offset)?;
    let filter = ContractFilter { supplier_id: params.id, org_code: params.org_code };
    let contracts = state.contracts.contracts(&filter, limit, offset).await?;
    Ok(Json(contracts))
}
