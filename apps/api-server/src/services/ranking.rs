// [apps/api-server/src/services/ranking.rs]
use crate::errors::ApiError;
use crate::state::AppState;
use sentinel_domain_models::SupplierSummary;

/// Reads the precomputed `supplier_scores` table rather than recomputing the
/// rule engine per row — the ranking endpoint serves a broad sweep of
/// suppliers and must stay cheap, unlike the single-supplier dossier.
pub async fn rank_suppliers(state: &AppState, limit: i64, offset: i64) -> Result<Vec<SupplierSummary>, ApiError> {
    Ok(state.suppliers.rank_by_score(limit, offset).await?)
}
