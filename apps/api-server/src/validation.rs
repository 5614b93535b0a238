// [apps/api-server/src/validation.rs]
//! Boundary validation (§6). Every function here either returns a validated
//! value or an `ApiError::InputInvalid` with a single-line opaque detail —
//! no internal identifier or library error ever crosses this boundary.

use crate::errors::ApiError;
use sentinel_domain_models::{AlertKind, CompanyId};
use std::str::FromStr;

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_OFFSET: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Pdf,
}

pub fn parse_supplier_id(raw: &str) -> Result<CompanyId, ApiError> {
    CompanyId::parse(raw).map_err(|e| ApiError::InputInvalid(e.to_string()))
}

pub fn parse_alert_kind(raw: &str) -> Result<AlertKind, ApiError> {
    AlertKind::from_str(raw).map_err(|_| ApiError::InputInvalid(format!("unknown alert kind '{raw}'")))
}

pub fn parse_export_format(raw: &str) -> Result<ExportFormat, ApiError> {
    match raw {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        "pdf" => Ok(ExportFormat::Pdf),
        other => Err(ApiError::InputInvalid(format!("unknown export format '{other}'"))),
    }
}

pub fn validate_search_query(raw: &str) -> Result<&str, ApiError> {
    let len = raw.chars().count();
    if len < 1 || len > 200 {
        return Err(ApiError::InputInvalid("search query must be 1..=200 characters".to_string()));
    }
    Ok(raw)
}

/// Clamps `limit` to `[1, 100]` (defaulting to 20) and `offset` to `>= 0`
/// (defaulting to 0). Out-of-range values are rejected, not silently
/// clamped — §6 treats them as `422` validation failures.
pub fn validate_pagination(limit: Option<i64>, offset: Option<i64>) -> Result<(i64, i64), ApiError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::InputInvalid(format!("limit must be in 1..={MAX_LIMIT}")));
    }

    let offset = offset.unwrap_or(DEFAULT_OFFSET);
    if offset < 0 {
        return Err(ApiError::InputInvalid("offset must be >= 0".to_string()));
    }

    Ok((limit, offset))
}

pub fn validate_org_code(raw: &str) -> Result<&str, ApiError> {
    if raw.is_empty() || raw.len() > 32 {
        return Err(ApiError::InputInvalid("org code must be 1..=32 bytes".to_string()));
    }
    Ok(raw)
}
