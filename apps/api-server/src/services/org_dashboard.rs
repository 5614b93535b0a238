// [apps/api-server/src/services/org_dashboard.rs]
use crate::errors::ApiError;
use crate::state::AppState;
use sentinel_domain_models::OrgDashboard;

pub async fn dashboard_for(state: &AppState, org_code: &str) -> Result<Option<OrgDashboard>, ApiError> {
    Ok(state.orgs.org_dashboard(org_code).await?)
}
