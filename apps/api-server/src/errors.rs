// [apps/api-server/src/errors.rs]
//! Single error type every handler returns. Maps 1:1 to §7's taxonomy and
//! never forwards a wrapped error's `Display` to the client — only a
//! constant detail string per class, the way the teacher's handlers never
//! leak `DbError` internals past the service boundary. `InputInvalid`'s
//! inner string still carries the real validator detail, but only as far
//! as the `warn!` call below — the client only ever sees the fixed string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sentinel_domain_models::DomainError;
use sentinel_infra_store::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("input rejected: {0}")]
    InputInvalid(String),
    #[error("resource not found")]
    NotFound,
    #[error("not implemented")]
    Unimplemented,
    #[error("rate limited")]
    RateLimited,
    #[error("request deadline exceeded")]
    Timeout,
    #[error("analytical store failure")]
    Store(#[from] StoreError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::InputInvalid(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::InputInvalid(detail) => {
                warn!(detail = %detail, "input rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, "input rejected".to_string())
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, "resource not found".to_string()),
            ApiError::Unimplemented => (StatusCode::NOT_IMPLEMENTED, "not implemented".to_string()),
            ApiError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "rate limit exceeded".to_string()),
            ApiError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "request deadline exceeded".to_string()),
            ApiError::Store(store_error) => {
                error!(error = %store_error, "analytical store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal store failure".to_string())
            }
        };

        (status, Json(json!({ "error": detail }))).into_response()
    }
}
