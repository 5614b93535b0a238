// [libs/domain/models/src/contract.rs]
use crate::errors::DomainError;
use crate::ids::GovOrgCode;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public contract awarded to a supplier. Invariant: `value > 0` (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub org_code: GovOrgCode,
    pub value: Money,
    pub subject: String,
    pub tender_number: Option<String>,
    pub signing_date: NaiveDate,
    pub validity_date: Option<NaiveDate>,
}

impl Contract {
    pub fn new(
        id: impl Into<String>,
        org_code: GovOrgCode,
        value: Money,
        subject: impl Into<String>,
        tender_number: Option<String>,
        signing_date: NaiveDate,
        validity_date: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        if value.is_zero() {
            return Err(DomainError::InvalidState("contract value must be > 0".into()));
        }
        Ok(Self {
            id: id.into(),
            org_code,
            value,
            subject: subject.into(),
            tender_number,
            signing_date,
            validity_date,
        })
    }
}
