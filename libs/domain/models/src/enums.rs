// [libs/domain/models/src/enums.rs]
//! Closed enumerations shared across the rule engine, the store adapter and
//! the HTTP surface. Kept deliberately disjoint: no `AlertKind` variant name
//! collides with an `IndicatorKind` variant name, so a property test can
//! assert the two rule dimensions never leak into each other (spec §8/§9).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six critical-alert kinds, in the emission order mandated by §4.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    PartnerIsPublicServant,
    SanctionedSupplierStillContracting,
    TenderRotation,
    DonationToContractAwarder,
    PartnerSanctionedElsewhere,
    Strawman,
}

impl AlertKind {
    /// Detection order mandated by the rule-engine table in §4.1.
    pub const ORDER: [AlertKind; 6] = [
        AlertKind::PartnerIsPublicServant,
        AlertKind::SanctionedSupplierStillContracting,
        AlertKind::TenderRotation,
        AlertKind::DonationToContractAwarder,
        AlertKind::PartnerSanctionedElsewhere,
        AlertKind::Strawman,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::PartnerIsPublicServant => "PARTNER_IS_PUBLIC_SERVANT",
            AlertKind::SanctionedSupplierStillContracting => "SANCTIONED_SUPPLIER_STILL_CONTRACTING",
            AlertKind::TenderRotation => "TENDER_ROTATION",
            AlertKind::DonationToContractAwarder => "DONATION_TO_CONTRACT_AWARDER",
            AlertKind::PartnerSanctionedElsewhere => "PARTNER_SANCTIONED_ELSEWHERE",
            AlertKind::Strawman => "STRAWMAN",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PARTNER_IS_PUBLIC_SERVANT" => Ok(AlertKind::PartnerIsPublicServant),
            "SANCTIONED_SUPPLIER_STILL_CONTRACTING" => Ok(AlertKind::SanctionedSupplierStillContracting),
            "TENDER_ROTATION" => Ok(AlertKind::TenderRotation),
            "DONATION_TO_CONTRACT_AWARDER" => Ok(AlertKind::DonationToContractAwarder),
            "PARTNER_SANCTIONED_ELSEWHERE" => Ok(AlertKind::PartnerSanctionedElsewhere),
            "STRAWMAN" => Ok(AlertKind::Strawman),
            _ => Err(()),
        }
    }
}

/// The nine cumulative-score indicator kinds, per the table in §4.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorKind {
    LowCapital,
    RecentCompany,
    ActivityMismatch,
    PartnerInManySuppliers,
    SharedAddress,
    ExclusiveBuyer,
    NoEmployees,
    SuddenGrowth,
    HistoricalSanction,
}

impl IndicatorKind {
    pub fn weight(&self) -> u32 {
        match self {
            IndicatorKind::LowCapital => 15,
            IndicatorKind::RecentCompany => 10,
            IndicatorKind::ActivityMismatch => 10,
            IndicatorKind::PartnerInManySuppliers => 20,
            IndicatorKind::SharedAddress => 15,
            IndicatorKind::ExclusiveBuyer => 10,
            IndicatorKind::NoEmployees => 10,
            IndicatorKind::SuddenGrowth => 10,
            IndicatorKind::HistoricalSanction => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::LowCapital => "LOW_CAPITAL",
            IndicatorKind::RecentCompany => "RECENT_COMPANY",
            IndicatorKind::ActivityMismatch => "ACTIVITY_MISMATCH",
            IndicatorKind::PartnerInManySuppliers => "PARTNER_IN_MANY_SUPPLIERS",
            IndicatorKind::SharedAddress => "SHARED_ADDRESS",
            IndicatorKind::ExclusiveBuyer => "EXCLUSIVE_BUYER",
            IndicatorKind::NoEmployees => "NO_EMPLOYEES",
            IndicatorKind::SuddenGrowth => "SUDDEN_GROWTH",
            IndicatorKind::HistoricalSanction => "HISTORICAL_SANCTION",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier of a critical alert. `MostSevere` ordinal is highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Severe,
    MostSevere,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Severe => "SEVERE",
            Severity::MostSevere => "MOST_SEVERE",
        }
    }
}

/// Closed-interval score band, derived from `ScoreBreakdown::total` (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskBand {
    /// Band lookup for the closed intervals in §4.2: `[0,20] [21,40] [41,65] [66,100]`.
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=20 => RiskBand::Low,
            21..=40 => RiskBand::Moderate,
            41..=65 => RiskBand::High,
            _ => RiskBand::Critical,
        }
    }
}

/// Registry cadastral status of a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CadastralStatus {
    Active,
    Suspended,
    Inapt,
    Dissolved,
}

impl CadastralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CadastralStatus::Active => "ACTIVE",
            CadastralStatus::Suspended => "SUSPENDED",
            CadastralStatus::Inapt => "INAPT",
            CadastralStatus::Dissolved => "DISSOLVED",
        }
    }
}

/// The three public sanction registries named in §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SanctionKind {
    AdministrativeSanctionsRegistry,
    IneligibleAndSanctionedCompaniesRegistry,
    NationalSuspendedCompaniesRegistry,
}

impl SanctionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SanctionKind::AdministrativeSanctionsRegistry => "ADMINISTRATIVE_SANCTIONS_REGISTRY",
            SanctionKind::IneligibleAndSanctionedCompaniesRegistry => "INELIGIBLE_AND_SANCTIONED_COMPANIES_REGISTRY",
            SanctionKind::NationalSuspendedCompaniesRegistry => "NATIONAL_SUSPENDED_COMPANIES_REGISTRY",
        }
    }
}

/// Resource type declared on an electoral donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonationResourceType {
    FinancialDirect,
    EstimatedInKind,
}

impl DonationResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationResourceType::FinancialDirect => "FINANCIAL_DIRECT",
            DonationResourceType::EstimatedInKind => "ESTIMATED_IN_KIND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_alert_kind_string_collides_with_an_indicator_kind_string() {
        let alert_names: HashSet<&str> = AlertKind::ORDER.iter().map(|k| k.as_str()).collect();
        let indicator_names: HashSet<&str> = [
            IndicatorKind::LowCapital,
            IndicatorKind::RecentCompany,
            IndicatorKind::ActivityMismatch,
            IndicatorKind::PartnerInManySuppliers,
            IndicatorKind::SharedAddress,
            IndicatorKind::ExclusiveBuyer,
            IndicatorKind::NoEmployees,
            IndicatorKind::SuddenGrowth,
            IndicatorKind::HistoricalSanction,
        ]
        .iter()
        .map(|k| k.as_str())
        .collect();

        assert!(alert_names.is_disjoint(&indicator_names));
    }

    #[test]
    fn band_boundaries_match_closed_intervals() {
        assert_eq!(RiskBand::from_total(0), RiskBand::Low);
        assert_eq!(RiskBand::from_total(20), RiskBand::Low);
        assert_eq!(RiskBand::from_total(21), RiskBand::Moderate);
        assert_eq!(RiskBand::from_total(40), RiskBand::Moderate);
        assert_eq!(RiskBand::from_total(41), RiskBand::High);
        assert_eq!(RiskBand::from_total(65), RiskBand::High);
        assert_eq!(RiskBand::from_total(66), RiskBand::Critical);
        assert_eq!(RiskBand::from_total(100), RiskBand::Critical);
    }
}
