// [libs/domain/models/src/supplier.rs]
use crate::enums::CadastralStatus;
use crate::ids::CompanyId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Postal address, kept as plain fields — display formatting is a UI concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub city: String,
    pub state: String,
}

/// The `Supplier` aggregate root. Identity is the `CompanyId`; alerts and
/// score are always derived by the rule engine, never edited in this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: CompanyId,
    pub legal_name: String,
    pub opening_date: NaiveDate,
    pub capital: Money,
    pub primary_activity_code: String,
    pub address: Address,
    pub cadastral_status: CadastralStatus,
}
