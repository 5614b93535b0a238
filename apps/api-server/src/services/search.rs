// [apps/api-server/src/services/search.rs]
use crate::errors::ApiError;
use crate::state::AppState;
use sentinel_domain_models::SupplierSummary;

pub async fn search_suppliers(state: &AppState, query: &str, limit: i64) -> Result<Vec<SupplierSummary>, ApiError> {
    Ok(state.suppliers.search_by_name_or_id(query, limit).await?)
}
