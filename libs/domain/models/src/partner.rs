// [libs/domain/models/src/partner.rs]
use crate::ids::PersonIdHash;
use serde::{Deserialize, Serialize};

/// A natural or juridical person holding an ownership link in a supplier,
/// hydrated with the link attributes the rule engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PersonIdHash,
    pub name: String,
    pub qualification: String,
    pub is_public_servant: bool,
    pub employing_body: Option<String>,
    pub is_sanctioned: bool,
    /// Number of distinct suppliers where this partner holds a link.
    pub gov_supplier_count: u32,
}
