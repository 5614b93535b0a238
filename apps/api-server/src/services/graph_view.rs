// [apps/api-server/src/services/graph_view.rs]
use crate::errors::ApiError;
use crate::state::AppState;
use sentinel_domain_models::{CompanyId, GraphView};

pub const DEFAULT_MAX_NODES: usize = 50;

pub async fn graph_for(state: &AppState, id: &CompanyId, max_nodes: usize) -> Result<Option<GraphView>, ApiError> {
    Ok(state.graph.graph_two_hops(id.as_str(), max_nodes).await?)
}
