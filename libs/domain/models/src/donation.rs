// [libs/domain/models/src/donation.rs]
use crate::enums::DonationResourceType;
use crate::errors::DomainError;
use crate::ids::{CompanyId, PersonIdHash};
use crate::money::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub party: String,
    pub office: String,
}

/// An electoral donation, linked to a supplier and/or one of its partners.
/// Invariant: at least one of `supplier_id` / `partner_id` is present (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub supplier_id: Option<CompanyId>,
    pub partner_id: Option<PersonIdHash>,
    pub candidate: Candidate,
    pub amount: Money,
    pub election_year: u16,
    pub resource_type: DonationResourceType,
}

impl Donation {
    pub fn new(
        id: impl Into<String>,
        supplier_id: Option<CompanyId>,
        partner_id: Option<PersonIdHash>,
        candidate: Candidate,
        amount: Money,
        election_year: u16,
        resource_type: DonationResourceType,
    ) -> Result<Self, DomainError> {
        if supplier_id.is_none() && partner_id.is_none() {
            return Err(DomainError::InvalidState(
                "donation must reference at least one of supplier_id or partner_id".into(),
            ));
        }
        Ok(Self {
            id: id.into(),
            supplier_id,
            partner_id,
            candidate,
            amount,
            election_year,
            resource_type,
        })
    }
}
