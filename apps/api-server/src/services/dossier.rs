// [apps/api-server/src/services/dossier.rs]
//! Assembles a single supplier's `CompleteDossier` (§4.4). Unlike the feed
//! and ranking endpoints, which read precomputed fact tables, this service
//! calls the rule engine live against freshly-fetched per-supplier data —
//! the dossier is the one place a caller can be certain the alerts and score
//! reflect the current contents of the store, not the last batch run.

use crate::errors::ApiError;
use crate::state::AppState;
use chrono::{Datelike, Utc};
use sentinel_domain_models::{CompanyId, CompleteDossier, GovOrgCode, Money};
use sentinel_domain_risk::{compute_cumulative_score, detect_critical_alerts, AlertContext, RelatedSupplier, ScoreContext};
use std::collections::{BTreeMap, HashMap};

pub async fn assemble_dossier(state: &AppState, id: &CompanyId) -> Result<Option<CompleteDossier>, ApiError> {
    let Some(supplier) = state.suppliers.supplier_by_id(id).await? else {
        return Ok(None);
    };

    let contracts = state.contracts.contracts_for(id.as_str()).await?;
    let partners = state.partners.partners_of(id.as_str()).await?;
    let sanctions = state.sanctions.sanctions_for(id.as_str()).await?;
    let donations = state.donations.donations_for(id.as_str()).await?;

    let donation_org_alignment = align_donations_to_org(&contracts, &donations);
    let related_suppliers = related_suppliers_of(state, id.as_str()).await?;
    let partner_ages = state.partners.partner_ages_of(id.as_str()).await?;
    let strawman_signals =
        if partner_ages.is_empty() { None } else { Some(sentinel_domain_risk::StrawmanSignals { partner_ages, ..Default::default() }) };

    let detected_at = Utc::now();
    let alert_ctx = AlertContext {
        supplier: &supplier,
        partners: &partners,
        contracts: &contracts,
        sanctions: &sanctions,
        donations: &donations,
        detected_at,
        donation_org_alignment: &donation_org_alignment,
        related_suppliers: &related_suppliers,
        strawman_signals: strawman_signals.as_ref(),
    };
    let alerts = detect_critical_alerts(&alert_ctx);

    let shares_address_with_another_supplier = state.suppliers.shares_address_with_another(&supplier).await?;
    let yearly_contracted_totals = yearly_totals(&contracts);

    let score_ctx = ScoreContext {
        supplier: &supplier,
        partners: &partners,
        contracts: &contracts,
        sanctions: &sanctions,
        shares_address_with_another_supplier,
        // No employee-count registry exists in this store; the predicate
        // always sees absent evidence (§4.2 `NO_EMPLOYEES`).
        employee_count_evidence: None,
        yearly_contracted_totals: &yearly_contracted_totals,
        as_of: detected_at,
    };
    let score = compute_cumulative_score(&score_ctx);

    Ok(Some(CompleteDossier {
        supplier,
        contracts,
        partners,
        sanctions,
        donations,
        alerts,
        score,
        disclaimer: state.settings.disclaimer.clone(),
    }))
}

/// A supplier whose contracts all settle with a single buying body aligns
/// every one of its (and its partners') donations to that body, since
/// nothing else in this store ties a donation's candidate to an org. A
/// supplier that contracts with more than one body is left unaligned —
/// guessing would fabricate a signal the ingestion data does not support.
fn align_donations_to_org(
    contracts: &[sentinel_domain_models::Contract],
    donations: &[sentinel_domain_models::Donation],
) -> HashMap<String, GovOrgCode> {
    let mut distinct_orgs: Vec<&GovOrgCode> = Vec::new();
    for contract in contracts {
        if !distinct_orgs.iter().any(|o| o.as_str() == contract.org_code.as_str()) {
            distinct_orgs.push(&contract.org_code);
        }
    }

    let mut alignment = HashMap::new();
    if let [only] = distinct_orgs.as_slice() {
        for donation in donations {
            alignment.insert(donation.id.clone(), (*only).clone());
        }
    }
    alignment
}

async fn related_suppliers_of(state: &AppState, supplier_id: &str) -> Result<Vec<RelatedSupplier>, ApiError> {
    let related_ids = state.partners.supplier_ids_sharing_partners(supplier_id).await?;

    let mut related = Vec::with_capacity(related_ids.len());
    for related_id in related_ids {
        let partners = state.partners.partners_of(&related_id).await?;
        let contracts = state.contracts.contracts_for(&related_id).await?;
        related.push(RelatedSupplier { partner_ids: partners.into_iter().map(|p| p.id).collect(), contracts });
    }
    Ok(related)
}

fn yearly_totals(contracts: &[sentinel_domain_models::Contract]) -> BTreeMap<i32, Money> {
    let mut totals: BTreeMap<i32, Money> = BTreeMap::new();
    for contract in contracts {
        let year = contract.signing_date.year();
        totals
            .entry(year)
            .and_modify(|running| *running = running.checked_add(&contract.value))
            .or_insert_with(|| contract.value.clone());
    }
    totals
}
