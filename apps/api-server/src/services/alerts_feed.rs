// [apps/api-server/src/services/alerts_feed.rs]
use crate::errors::ApiError;
use crate::state::AppState;
use sentinel_domain_models::{AlertFeedItem, AlertKind};

pub async fn feed(state: &AppState, limit: i64, offset: i64) -> Result<Vec<AlertFeedItem>, ApiError> {
    Ok(state.alerts.alert_feed(limit, offset).await?)
}

pub async fn feed_by_kind(state: &AppState, kind: AlertKind, limit: i64, offset: i64) -> Result<Vec<AlertFeedItem>, ApiError> {
    Ok(state.alerts.alert_feed_by_kind(kind, limit, offset).await?)
}
