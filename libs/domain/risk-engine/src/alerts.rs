// [libs/domain/risk-engine/src/alerts.rs]
/*!
 * Critical-alert detection (§4.1). Pure function: given a supplier and its
 * in-memory collections, returns the alerts that hold. Emission order
 * follows `AlertKind::ORDER`; duplicates on the same `(kind, partner?)` pair
 * collapse to one. This module never imports anything from `score`.
 */

use crate::context::AlertContext;
use rust_decimal::Decimal;
use sentinel_domain_models::{AlertKind, CriticalAlert, Severity};
use std::collections::HashSet;

const DONATION_THRESHOLD: Decimal = Decimal::from_parts(10_000_00, 0, 0, false, 2);
const CONTRACT_AWARD_THRESHOLD: Decimal = Decimal::from_parts(500_000_00, 0, 0, false, 2);

pub fn detect_critical_alerts(ctx: &AlertContext<'_>) -> Vec<CriticalAlert> {
    let mut emitted = Vec::new();
    let mut seen: HashSet<(AlertKind, Option<String>)> = HashSet::new();

    for kind in AlertKind::ORDER {
        let candidates = match kind {
            AlertKind::PartnerIsPublicServant => detect_public_servant_partners(ctx),
            AlertKind::SanctionedSupplierStillContracting => detect_sanctioned_still_contracting(ctx),
            AlertKind::TenderRotation => detect_tender_rotation(ctx),
            AlertKind::DonationToContractAwarder => detect_donation_to_contract_awarder(ctx),
            AlertKind::PartnerSanctionedElsewhere => detect_partner_sanctioned_elsewhere(ctx),
            AlertKind::Strawman => detect_strawman(ctx),
        };

        for alert in candidates {
            let key = (alert.kind, alert.partner_reference.as_ref().map(|p| p.as_str().to_string()));
            if seen.insert(key) {
                emitted.push(alert);
            }
        }
    }

    emitted
}

fn detect_public_servant_partners(ctx: &AlertContext<'_>) -> Vec<CriticalAlert> {
    ctx.partners
        .iter()
        .filter(|p| p.is_public_servant)
        .map(|p| CriticalAlert {
            kind: AlertKind::PartnerIsPublicServant,
            severity: Severity::MostSevere,
            description: "A partner of this supplier is a public servant.".to_string(),
            evidence: format!("partner={} employing_body={:?}", p.id, p.employing_body),
            detected_at: ctx.detected_at,
            partner_reference: Some(p.id.clone()),
        })
        .collect()
}

fn detect_sanctioned_still_contracting(ctx: &AlertContext<'_>) -> Vec<CriticalAlert> {
    let today = ctx.detected_at.date_naive();

    let active_sanctions: Vec<_> = ctx.sanctions.iter().filter(|s| s.is_active(today)).collect();
    if active_sanctions.is_empty() {
        return Vec::new();
    }

    let mut triggering_contracts = Vec::new();
    let mut triggering_sanctions = Vec::new();
    for sanction in &active_sanctions {
        for contract in ctx.contracts {
            if contract.signing_date >= sanction.start_date {
                triggering_contracts.push(contract.id.clone());
                triggering_sanctions.push(sanction.id.clone());
            }
        }
    }

    if triggering_contracts.is_empty() {
        return Vec::new();
    }

    vec![CriticalAlert {
        kind: AlertKind::SanctionedSupplierStillContracting,
        severity: Severity::MostSevere,
        description: "Supplier holds an active sanction yet signed a contract on or after the sanction start date.".to_string(),
        evidence: format!(
            "sanctions={:?} contracts={:?}",
            triggering_sanctions, triggering_contracts
        ),
        detected_at: ctx.detected_at,
        partner_reference: None,
    }]
}

fn detect_tender_rotation(ctx: &AlertContext<'_>) -> Vec<CriticalAlert> {
    let own_partner_ids: HashSet<_> = ctx.partners.iter().map(|p| p.id.clone()).collect();
    let own_tender_numbers: HashSet<_> = ctx
        .contracts
        .iter()
        .filter_map(|c| c.tender_number.clone())
        .collect();

    let mut alerts = Vec::new();
    for related in ctx.related_suppliers {
        let shared_partners: Vec<_> = related
            .partner_ids
            .iter()
            .filter(|id| own_partner_ids.contains(*id))
            .collect();
        if shared_partners.is_empty() {
            continue;
        }

        let related_tender_numbers: HashSet<_> =
            related.contracts.iter().filter_map(|c| c.tender_number.clone()).collect();

        let shared_tenders: Vec<_> =
            own_tender_numbers.intersection(&related_tender_numbers).cloned().collect();
        if shared_tenders.is_empty() {
            continue;
        }

        for partner_id in shared_partners {
            alerts.push(CriticalAlert {
                kind: AlertKind::TenderRotation,
                severity: Severity::MostSevere,
                description: "Two suppliers sharing a partner both appear under the same tender.".to_string(),
                evidence: format!("partner={} tenders={:?}", partner_id, shared_tenders),
                detected_at: ctx.detected_at,
                partner_reference: Some(partner_id.clone()),
            });
        }
    }
    alerts
}

fn detect_donation_to_contract_awarder(ctx: &AlertContext<'_>) -> Vec<CriticalAlert> {
    let mut alerts = Vec::new();

    for donation in ctx.donations {
        if donation.amount.as_decimal() <= DONATION_THRESHOLD {
            continue;
        }
        let Some(aligned_org) = ctx.donation_org_alignment.get(&donation.id) else {
            continue;
        };

        let awarding_contract = ctx
            .contracts
            .iter()
            .find(|c| &c.org_code == aligned_org && c.value.as_decimal() > CONTRACT_AWARD_THRESHOLD);

        if let Some(contract) = awarding_contract {
            alerts.push(CriticalAlert {
                kind: AlertKind::DonationToContractAwarder,
                severity: Severity::Severe,
                description: "A sizeable donation aligns with a sizeable contract from the same government body.".to_string(),
                evidence: format!(
                    "donation={} amount={} contract={} value={} org={}",
                    donation.id, donation.amount, contract.id, contract.value, aligned_org
                ),
                detected_at: ctx.detected_at,
                partner_reference: None,
            });
        }
    }
    alerts
}

fn detect_partner_sanctioned_elsewhere(ctx: &AlertContext<'_>) -> Vec<CriticalAlert> {
    ctx.partners
        .iter()
        .filter(|p| p.is_sanctioned)
        .map(|p| CriticalAlert {
            kind: AlertKind::PartnerSanctionedElsewhere,
            severity: Severity::Severe,
            description: "A partner of this supplier is sanctioned elsewhere.".to_string(),
            evidence: format!("partner={}", p.id),
            detected_at: ctx.detected_at,
            partner_reference: Some(p.id.clone()),
        })
        .collect()
}

fn detect_strawman(ctx: &AlertContext<'_>) -> Vec<CriticalAlert> {
    let Some(signals) = ctx.strawman_signals else {
        return Vec::new();
    };

    let bundle_holds = signals.bundle_satisfied();

    ctx.partners
        .iter()
        .filter_map(|p| {
            let age_outlier = signals
                .partner_ages
                .get(&p.id)
                .map(|age| *age < 20 || *age > 80)
                .unwrap_or(false);

            if !(age_outlier || bundle_holds) {
                return None;
            }

            Some(CriticalAlert {
                kind: AlertKind::Strawman,
                severity: Severity::MostSevere,
                description: "Heuristic bundle indicative of a strawman (testa-de-ferro) arrangement.".to_string(),
                evidence: format!(
                    "partner={} age_outlier={} bundle_holds={}",
                    p.id, age_outlier, bundle_holds
                ),
                detected_at: ctx.detected_at,
                partner_reference: Some(p.id.clone()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use sentinel_domain_models::{
        CompanyId, Contract, GovOrgCode, Money, Partner, PersonIdHash, Sanction, SanctionKind, Supplier,
    };
    use std::collections::HashMap;

    fn supplier() -> Supplier {
        Supplier {
            id: CompanyId::parse("11444777000161").unwrap(),
            legal_name: "Acme Fornecedora Ltda".to_string(),
            opening_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            capital: Money::from_str_value("1000000.00").unwrap(),
            primary_activity_code: "4711".to_string(),
            address: sentinel_domain_models::Address {
                street: "Rua das Flores".to_string(),
                number: "100".to_string(),
                complement: None,
                city: "Brasilia".to_string(),
                state: "DF".to_string(),
            },
            cadastral_status: sentinel_domain_models::CadastralStatus::Active,
        }
    }

    fn partner(is_public_servant: bool) -> Partner {
        Partner {
            id: PersonIdHash::new("hash-partner-1"),
            name: "Jane Partner".to_string(),
            qualification: "Administrator".to_string(),
            is_public_servant,
            employing_body: if is_public_servant { Some("Ministry of X".to_string()) } else { None },
            is_sanctioned: false,
            gov_supplier_count: 1,
        }
    }

    fn contract(org: &str, value: &str, signing: NaiveDate) -> Contract {
        Contract::new(
            format!("contract-{org}-{value}"),
            GovOrgCode::parse(org).unwrap(),
            Money::from_str_value(value).unwrap(),
            "fornecimento de materiais".to_string(),
            None,
            signing,
            None,
        )
        .unwrap()
    }

    fn detected_at() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn public_servant_partner_forces_top_severity_alert() {
        let supplier = supplier();
        let partners = vec![partner(true)];
        let contracts = vec![contract("ORG1", "50000.00", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())];
        let alignment = HashMap::new();
        let ctx = AlertContext {
            supplier: &supplier,
            partners: &partners,
            contracts: &contracts,
            sanctions: &[],
            donations: &[],
            detected_at: detected_at(),
            donation_org_alignment: &alignment,
            related_suppliers: &[],
            strawman_signals: None,
        };

        let alerts = detect_critical_alerts(&ctx);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::PartnerIsPublicServant);
        assert_eq!(alerts[0].severity, Severity::MostSevere);
    }

    #[test]
    fn active_sanction_with_later_contract_fires_alert() {
        let supplier = supplier();
        let sanction = Sanction::new(
            "sanction-1",
            SanctionKind::AdministrativeSanctionsRegistry,
            "TCU",
            "irregularity",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            None,
        )
        .unwrap();
        let contracts = vec![contract("ORG1", "10000.00", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())];
        let alignment = HashMap::new();
        let ctx = AlertContext {
            supplier: &supplier,
            partners: &[],
            contracts: &contracts,
            sanctions: std::slice::from_ref(&sanction),
            donations: &[],
            detected_at: detected_at(),
            donation_org_alignment: &alignment,
            related_suppliers: &[],
            strawman_signals: None,
        };

        let alerts = detect_critical_alerts(&ctx);
        assert!(alerts.iter().any(|a| a.kind == AlertKind::SanctionedSupplierStillContracting));
    }

    #[test]
    fn expired_sanction_does_not_fire_contracting_alert() {
        let supplier = supplier();
        let sanction = Sanction::new(
            "sanction-1",
            SanctionKind::AdministrativeSanctionsRegistry,
            "TCU",
            "irregularity",
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            Some(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()),
        )
        .unwrap();
        let contracts = vec![contract("ORG1", "10000.00", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())];
        let alignment = HashMap::new();
        let ctx = AlertContext {
            supplier: &supplier,
            partners: &[],
            contracts: &contracts,
            sanctions: std::slice::from_ref(&sanction),
            donations: &[],
            detected_at: detected_at(),
            donation_org_alignment: &alignment,
            related_suppliers: &[],
            strawman_signals: None,
        };

        let alerts = detect_critical_alerts(&ctx);
        assert!(!alerts.iter().any(|a| a.kind == AlertKind::SanctionedSupplierStillContracting));
    }

    #[test]
    fn donation_and_contract_must_both_clear_their_threshold() {
        let supplier = supplier();
        let contracts = vec![contract("ORGX", "600000.00", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())];
        let donation = sentinel_domain_models::Donation::new(
            "donation-1",
            Some(supplier.id.clone()),
            None,
            sentinel_domain_models::Candidate {
                name: "Candidate A".to_string(),
                party: "Party A".to_string(),
                office: "Mayor".to_string(),
            },
            Money::from_str_value("15000.00").unwrap(),
            2024,
            sentinel_domain_models::DonationResourceType::FinancialDirect,
        )
        .unwrap();
        let mut alignment = HashMap::new();
        alignment.insert("donation-1".to_string(), GovOrgCode::parse("ORGX").unwrap());

        let ctx = AlertContext {
            supplier: &supplier,
            partners: &[],
            contracts: &contracts,
            sanctions: &[],
            donations: std::slice::from_ref(&donation),
            detected_at: detected_at(),
            donation_org_alignment: &alignment,
            related_suppliers: &[],
            strawman_signals: None,
        };

        let alerts = detect_critical_alerts(&ctx);
        assert!(alerts.iter().any(|a| a.kind == AlertKind::DonationToContractAwarder));
    }

    #[test]
    fn donation_below_threshold_does_not_fire() {
        let supplier = supplier();
        let contracts = vec![contract("ORGX", "600000.00", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())];
        let donation = sentinel_domain_models::Donation::new(
            "donation-1",
            Some(supplier.id.clone()),
            None,
            sentinel_domain_models::Candidate {
                name: "Candidate A".to_string(),
                party: "Party A".to_string(),
                office: "Mayor".to_string(),
            },
            Money::from_str_value("5000.00").unwrap(),
            2024,
            sentinel_domain_models::DonationResourceType::FinancialDirect,
        )
        .unwrap();
        let mut alignment = HashMap::new();
        alignment.insert("donation-1".to_string(), GovOrgCode::parse("ORGX").unwrap());

        let ctx = AlertContext {
            supplier: &supplier,
            partners: &[],
            contracts: &contracts,
            sanctions: &[],
            donations: std::slice::from_ref(&donation),
            detected_at: detected_at(),
            donation_org_alignment: &alignment,
            related_suppliers: &[],
            strawman_signals: None,
        };

        let alerts = detect_critical_alerts(&ctx);
        assert!(!alerts.iter().any(|a| a.kind == AlertKind::DonationToContractAwarder));
    }

    #[test]
    fn strawman_absent_inputs_never_fabricate_a_positive() {
        let supplier = supplier();
        let partners = vec![partner(false)];
        let alignment = HashMap::new();
        let ctx = AlertContext {
            supplier: &supplier,
            partners: &partners,
            contracts: &[],
            sanctions: &[],
            donations: &[],
            detected_at: detected_at(),
            donation_org_alignment: &alignment,
            related_suppliers: &[],
            strawman_signals: None,
        };

        assert!(!detect_critical_alerts(&ctx).iter().any(|a| a.kind == AlertKind::Strawman));
    }

    #[test]
    fn duplicate_public_servant_alerts_for_same_partner_collapse() {
        let supplier = supplier();
        let partners = vec![partner(true), partner(true)];
        let alignment = HashMap::new();
        let ctx = AlertContext {
            supplier: &supplier,
            partners: &partners,
            contracts: &[],
            sanctions: &[],
            donations: &[],
            detected_at: detected_at(),
            donation_org_alignment: &alignment,
            related_suppliers: &[],
            strawman_signals: None,
        };

        let alerts = detect_critical_alerts(&ctx);
        assert_eq!(alerts.len(), 1);
    }
}
