// [apps/api-server/src/handlers/suppliers.rs]
use crate::errors::ApiError;
use crate::services::{dossier, export, graph_view, ranking};
use crate::state::AppState;
use crate::validation::{self, parse_export_format, parse_supplier_id, validate_pagination};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub format: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphParams {
    pub max_nodes: Option<usize>,
}

#[instrument(skip(state))]
pub async fn get_dossier(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let supplier_id = parse_supplier_id(&id)?;
    let Some(complete) = dossier::assemble_dossier(&state, &supplier_id).await? else {
        return Err(ApiError::NotFound);
    };
    Ok(Json(complete))
}

#[instrument(skip(state))]
pub async fn get_ranking(State(state): State<AppState>, Query(page): Query<PageParams>) -> Result<impl IntoResponse, ApiError> {
    let (limit, offset) = validate_pagination(page.limit, page.offset)?;
    let summaries = ranking::rank_suppliers(&state, limit, offset).await?;
    Ok(Json(summaries))
}

#[instrument(skip(state))]
pub async fn get_graph(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<GraphParams>,
) -> Result<impl IntoResponse, ApiError> {
    let supplier_id = parse_supplier_id(&id)?;
    let max_nodes = params.max_nodes.unwrap_or(graph_view::DEFAULT_MAX_NODES);
    let Some(view) = graph_view::graph_for(&state, &supplier_id, max_nodes).await? else {
        return Err(ApiError::NotFound);
    };
    Ok(Json(view))
}

#[instrument(skip(state))]
pub async fn get_export(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, ApiError> {
    let supplier_id = parse_supplier_id(&id)?;
    let format = parse_export_format(&params.format)?;

    let Some(complete) = dossier::assemble_dossier(&state, &supplier_id).await? else {
        return Err(ApiError::NotFound);
    };
    let payload = export::export(&complete, format)?;

    Ok(match payload {
        sentinel_domain_models::ExportPayload::Json(dossier) => Json(dossier).into_response(),
        sentinel_domain_models::ExportPayload::Csv(body) => {
            ([(axum::http::header::CONTENT_TYPE, "text/csv")], body).into_response()
        }
    })
}

#[instrument(skip(state))]
pub async fn get_search(State(state): State<AppState>, Query(page): Query<SearchParams>) -> Result<impl IntoResponse, ApiError> {
    let query = validation::validate_search_query(&page.q)?;
    let limit = page.limit.unwrap_or(validation::DEFAULT_LIMIT).clamp(1, validation::MAX_LIMIT);
    let summaries = crate::services::search::search_suppliers(&state, query, limit).await?;
    Ok(Json(summaries))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<i64>,
}
