// [libs/domain/risk-engine/src/context.rs]
//! In-memory context records handed to the two rule-engine entry points.
//! Assembling these from the repository layer is an application-service
//! concern (§4.4); the rule engine itself never touches the store.

use chrono::{DateTime, Utc};
use sentinel_domain_models::{Contract, Donation, GovOrgCode, Partner, PersonIdHash, Sanction, Supplier};
use std::collections::{BTreeMap, HashMap};

/// A supplier related to the one under evaluation, used only for the
/// `TENDER_ROTATION` check: the set of partners it shares with the subject
/// supplier and the contracts it has been awarded.
#[derive(Debug, Clone)]
pub struct RelatedSupplier {
    pub partner_ids: Vec<PersonIdHash>,
    pub contracts: Vec<Contract>,
}

/// Optional, partially-known signals for the `STRAWMAN` heuristic bundle
/// (§4.1, Open Question in §9). Any field left `None` means the detector
/// must treat that sub-condition as not holding rather than guess — the
/// detector never fabricates a positive from missing data.
#[derive(Debug, Clone, Default)]
pub struct StrawmanSignals {
    /// Partner age in years, by partner id. A partner absent from this map
    /// is treated as age-unknown (the age sub-condition does not fire for them).
    pub partner_ages: HashMap<PersonIdHash, u32>,
    pub no_prior_business_history: Option<bool>,
    pub capital_disproportionate_to_presumed_income: Option<bool>,
    pub high_government_contract_total: Option<bool>,
}

impl StrawmanSignals {
    /// True only when every bundled sub-condition is both known and satisfied.
    pub fn bundle_satisfied(&self) -> bool {
        matches!(
            (
                self.no_prior_business_history,
                self.capital_disproportionate_to_presumed_income,
                self.high_government_contract_total,
            ),
            (Some(true), Some(true), Some(true))
        )
    }
}

/// Everything `detect_critical_alerts` needs for one supplier.
#[derive(Debug, Clone)]
pub struct AlertContext<'a> {
    pub supplier: &'a Supplier,
    pub partners: &'a [Partner],
    pub contracts: &'a [Contract],
    pub sanctions: &'a [Sanction],
    pub donations: &'a [Donation],
    /// Caller-supplied detection timestamp, for testability (§4.1).
    pub detected_at: DateTime<Utc>,
    /// Maps a donation id to the government org code its candidate is
    /// cross-referenced against, as resolved by the ingestion pipeline.
    /// Absent entries mean no known alignment, and the donation cannot
    /// trigger `DONATION_TO_CONTRACT_AWARDER`.
    pub donation_org_alignment: &'a HashMap<String, GovOrgCode>,
    /// Level-1 neighborhood used only for `TENDER_ROTATION`; empty when the
    /// caller did not supply a graph+contracts view (§4.1).
    pub related_suppliers: &'a [RelatedSupplier],
    pub strawman_signals: Option<&'a StrawmanSignals>,
}

/// Everything `compute_cumulative_score` needs for one supplier.
#[derive(Debug, Clone)]
pub struct ScoreContext<'a> {
    pub supplier: &'a Supplier,
    pub partners: &'a [Partner],
    pub contracts: &'a [Contract],
    pub sanctions: &'a [Sanction],
    /// Whether another supplier shares this supplier's street + number.
    pub shares_address_with_another_supplier: bool,
    /// Declared employee-count evidence, `None` when the source has no row.
    pub employee_count_evidence: Option<u32>,
    /// Total contracted value per calendar year, for `SUDDEN_GROWTH`.
    pub yearly_contracted_totals: &'a BTreeMap<i32, sentinel_domain_models::Money>,
    pub as_of: DateTime<Utc>,
}
