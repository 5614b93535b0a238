// [libs/infra/analytics-store/src/mapping.rs]
//! Row-to-domain-entity hydration shared across repositories. Kept in one
//! place so every adapter parses dates and money the same way.

use crate::errors::StoreError;
use chrono::NaiveDate;
use libsql::Row;
use sentinel_domain_models::{
    Candidate, CadastralStatus, Contract, Donation, DonationResourceType, GovOrgCode, Money, Partner,
    PersonIdHash, RiskBand, Sanction, SanctionKind, Share, Supplier,
};

pub fn parse_date(raw: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| StoreError::Mapping(format!("invalid date '{raw}': {e}")))
}

fn parse_optional_date(raw: Option<String>) -> Result<Option<NaiveDate>, StoreError> {
    raw.map(|s| parse_date(&s)).transpose()
}

pub fn map_contract_row(row: &Row) -> Result<Contract, StoreError> {
    let org_code: String = row.get(2)?;
    let value: String = row.get(3)?;
    let subject: String = row.get(4)?;
    let tender_number: Option<String> = row.get(5)?;
    let signing_date: String = row.get(6)?;
    let validity_date: Option<String> = row.get(7)?;

    Contract::new(
        row.get::<String>(0)?,
        GovOrgCode::parse(&org_code).map_err(|e| StoreError::Mapping(e.to_string()))?,
        Money::from_str_value(&value).map_err(|e| StoreError::Mapping(e.to_string()))?,
        subject,
        tender_number,
        parse_date(&signing_date)?,
        parse_optional_date(validity_date)?,
    )
    .map_err(|e| StoreError::Mapping(e.to_string()))
}

pub fn map_sanction_row(row: &Row) -> Result<Sanction, StoreError> {
    let kind: String = row.get(2)?;
    let sanction_kind = match kind.as_str() {
        "ADMINISTRATIVE_SANCTIONS_REGISTRY" => SanctionKind::AdministrativeSanctionsRegistry,
        "INELIGIBLE_AND_SANCTIONED_COMPANIES_REGISTRY" => SanctionKind::IneligibleAndSanctionedCompaniesRegistry,
        "NATIONAL_SUSPENDED_COMPANIES_REGISTRY" => SanctionKind::NationalSuspendedCompaniesRegistry,
        other => return Err(StoreError::Mapping(format!("unknown sanction kind '{other}'"))),
    };

    let reason: String = row.get(4)?;
    let start_date: String = row.get(5)?;
    let end_date: Option<String> = row.get(6)?;

    Sanction::new(
        row.get::<String>(0)?,
        sanction_kind,
        row.get::<String>(3)?,
        reason,
        parse_date(&start_date)?,
        parse_optional_date(end_date)?,
    )
    .map_err(|e| StoreError::Mapping(e.to_string()))
}

pub fn map_donation_row(row: &Row) -> Result<Donation, StoreError> {
    let supplier_id: Option<String> = row.get(1)?;
    let partner_id: Option<String> = row.get(2)?;
    let amount: String = row.get(6)?;
    let resource_type: String = row.get(8)?;

    let resource_type = match resource_type.as_str() {
        "FINANCIAL_DIRECT" => DonationResourceType::FinancialDirect,
        "ESTIMATED_IN_KIND" => DonationResourceType::EstimatedInKind,
        other => return Err(StoreError::Mapping(format!("unknown donation resource type '{other}'"))),
    };

    Donation::new(
        row.get::<String>(0)?,
        supplier_id
            .map(|s| sentinel_domain_models::CompanyId::parse(&s))
            .transpose()
            .map_err(|e| StoreError::Mapping(e.to_string()))?,
        partner_id.map(PersonIdHash::new),
        Candidate {
            name: row.get(3)?,
            party: row.get(4)?,
            office: row.get(5)?,
        },
        Money::from_str_value(&amount).map_err(|e| StoreError::Mapping(e.to_string()))?,
        row.get::<i64>(7)? as u16,
        resource_type,
    )
    .map_err(|e| StoreError::Mapping(e.to_string()))
}

/// Maps a `partner_profiles` row joined with its `gov_supplier_count` column
/// (computed by the repository's query, appended as the last column).
pub fn map_partner_row(row: &Row) -> Result<Partner, StoreError> {
    Ok(Partner {
        id: PersonIdHash::new(row.get::<String>(0)?),
        name: row.get(1)?,
        qualification: row.get(2)?,
        is_public_servant: row.get::<i64>(3)? != 0,
        employing_body: row.get(4)?,
        is_sanctioned: row.get::<i64>(5)? != 0,
        gov_supplier_count: row.get::<i64>(6)? as u32,
    })
}

pub fn map_supplier_row(row: &Row) -> Result<Supplier, StoreError> {
    let opening_date: String = row.get(2)?;
    let capital: String = row.get(3)?;
    let cadastral_status: String = row.get(10)?;

    let status = match cadastral_status.as_str() {
        "ACTIVE" => CadastralStatus::Active,
        "SUSPENDED" => CadastralStatus::Suspended,
        "INAPT" => CadastralStatus::Inapt,
        "DISSOLVED" => CadastralStatus::Dissolved,
        other => return Err(StoreError::Mapping(format!("unknown cadastral status '{other}'"))),
    };

    Ok(Supplier {
        id: sentinel_domain_models::CompanyId::parse(&row.get::<String>(0)?)
            .map_err(|e| StoreError::Mapping(e.to_string()))?,
        legal_name: row.get(1)?,
        opening_date: parse_date(&opening_date)?,
        capital: Money::from_str_value(&capital).map_err(|e| StoreError::Mapping(e.to_string()))?,
        primary_activity_code: row.get(4)?,
        address: sentinel_domain_models::Address {
            street: row.get(5)?,
            number: row.get(6)?,
            complement: row.get(7)?,
            city: row.get(8)?,
            state: row.get(9)?,
        },
        cadastral_status: status,
    })
}

pub fn map_share(raw: &str) -> Result<Share, StoreError> {
    Share::from_str_value(raw).map_err(|e| StoreError::Mapping(e.to_string()))
}

/// Sums TEXT-encoded money values exactly, in fixed point. SQLite has no
/// decimal type, so any `SUM(...)` performed by the query engine itself
/// silently promotes through binary floating point (spec §3) — totals that
/// feed a response or an `ORDER BY` tiebreak are always aggregated here,
/// over values already parsed into `Money`, instead.
pub fn sum_money<I: IntoIterator<Item = String>>(values: I) -> Result<Money, StoreError> {
    values.into_iter().try_fold(Money::ZERO, |running, raw| {
        let amount = Money::from_str_value(&raw).map_err(|e| StoreError::Mapping(e.to_string()))?;
        Ok(running.checked_add(&amount))
    })
}

pub fn parse_band(raw: &str) -> Result<RiskBand, StoreError> {
    match raw {
        "LOW" => Ok(RiskBand::Low),
        "MODERATE" => Ok(RiskBand::Moderate),
        "HIGH" => Ok(RiskBand::High),
        "CRITICAL" => Ok(RiskBand::Critical),
        other => Err(StoreError::Mapping(format!("unknown risk band '{other}'"))),
    }
}
