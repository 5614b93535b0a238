// [libs/domain/models/src/ownership.rs]
use crate::ids::{CompanyId, PersonIdHash};
use crate::money::Share;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An ownership link between a supplier and one of its partners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipLink {
    pub supplier_id: CompanyId,
    pub partner_id: PersonIdHash,
    pub qualification: String,
    pub entry_date: NaiveDate,
    pub exit_date: Option<NaiveDate>,
    pub capital_share: Share,
}
