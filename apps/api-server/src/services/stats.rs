// [apps/api-server/src/services/stats.rs]
use crate::errors::ApiError;
use crate::state::AppState;
use sentinel_domain_models::Stats;

pub async fn rollup(state: &AppState) -> Result<Stats, ApiError> {
    Ok(state.stats.stats_rollup().await?)
}
