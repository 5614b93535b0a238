// [libs/domain/models/src/sanction.rs]
use crate::enums::SanctionKind;
use crate::errors::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A sanction record against a supplier in one of the three public registries.
///
/// `active` is derived, never stored independently: `end.is_none() || end >= today`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sanction {
    pub id: String,
    pub kind: SanctionKind,
    pub sanctioning_body: String,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl Sanction {
    pub fn new(
        id: impl Into<String>,
        kind: SanctionKind,
        sanctioning_body: impl Into<String>,
        reason: impl Into<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        if let Some(end) = end_date {
            if start_date > end {
                return Err(DomainError::InvalidState("sanction start_date must be <= end_date".into()));
            }
        }
        Ok(Self {
            id: id.into(),
            kind,
            sanctioning_body: sanctioning_body.into(),
            reason: reason.into(),
            start_date,
            end_date,
        })
    }

    /// `end is null or end >= today` (§3).
    pub fn is_active(&self, today: NaiveDate) -> bool {
        match self.end_date {
            None => true,
            Some(end) => end >= today,
        }
    }
}
