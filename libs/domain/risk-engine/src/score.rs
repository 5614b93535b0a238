// [libs/domain/risk-engine/src/score.rs]
/*!
 * Cumulative score computation (§4.2). Pure function: nine independent
 * indicator predicates, each contributing its fixed weight on activation;
 * `total = min(100, sum of active weights)`. This module never imports
 * anything from `alerts`.
 */

use crate::context::ScoreContext;
use crate::thresholds;
use chrono::Months;
use rust_decimal::Decimal;
use sentinel_domain_models::{IndicatorKind, ScoreBreakdown, ScoreIndicator};
use std::collections::HashSet;

const LOW_CAPITAL_CONTRACT_FLOOR: Decimal = Decimal::from_parts(100_000_00, 0, 0, false, 2);

pub fn compute_cumulative_score(ctx: &ScoreContext<'_>) -> ScoreBreakdown {
    let checks: [fn(&ScoreContext<'_>) -> Option<ScoreIndicator>; 9] = [
        check_low_capital,
        check_recent_company,
        check_activity_mismatch,
        check_partner_in_many_suppliers,
        check_shared_address,
        check_exclusive_buyer,
        check_no_employees,
        check_sudden_growth,
        check_historical_sanction,
    ];

    let indicators: Vec<ScoreIndicator> = checks.iter().filter_map(|check| check(ctx)).collect();
    ScoreBreakdown::from_indicators(indicators)
}

fn check_low_capital(ctx: &ScoreContext<'_>) -> Option<ScoreIndicator> {
    let threshold = thresholds::low_capital_threshold(&ctx.supplier.primary_activity_code);
    let below_threshold = ctx.supplier.capital.as_decimal() < threshold.as_decimal();
    let has_large_contract = ctx.contracts.iter().any(|c| c.value.as_decimal() > LOW_CAPITAL_CONTRACT_FLOOR);

    (below_threshold && has_large_contract).then(|| ScoreIndicator {
        kind: IndicatorKind::LowCapital,
        weight: IndicatorKind::LowCapital.weight(),
        description: "Declared capital is below the sector threshold with a large contract on file.".to_string(),
        evidence: format!("capital={} threshold={}", ctx.supplier.capital, threshold),
    })
}

fn check_recent_company(ctx: &ScoreContext<'_>) -> Option<ScoreIndicator> {
    let first_contract_date = ctx.contracts.iter().map(|c| c.signing_date).min()?;
    let six_months_after_opening = ctx.supplier.opening_date.checked_add_months(Months::new(6))?;

    (first_contract_date < six_months_after_opening).then(|| ScoreIndicator {
        kind: IndicatorKind::RecentCompany,
        weight: IndicatorKind::RecentCompany.weight(),
        description: "First contract was signed less than six months after incorporation.".to_string(),
        evidence: format!(
            "opening_date={} first_contract_date={}",
            ctx.supplier.opening_date, first_contract_date
        ),
    })
}

fn check_activity_mismatch(ctx: &ScoreContext<'_>) -> Option<ScoreIndicator> {
    let supplier_category = thresholds::activity_category(&ctx.supplier.primary_activity_code)?;

    let contract_categories: HashSet<_> =
        ctx.contracts.iter().filter_map(|c| thresholds::subject_category(&c.subject)).collect();
    if contract_categories.is_empty() {
        return None;
    }

    let disjoint = !contract_categories.contains(&supplier_category);

    disjoint.then(|| ScoreIndicator {
        kind: IndicatorKind::ActivityMismatch,
        weight: IndicatorKind::ActivityMismatch.weight(),
        description: "Primary activity code does not align with any contracted subject category.".to_string(),
        evidence: format!(
            "primary_activity_code={} supplier_category={:?}",
            ctx.supplier.primary_activity_code, supplier_category
        ),
    })
}

fn check_partner_in_many_suppliers(ctx: &ScoreContext<'_>) -> Option<ScoreIndicator> {
    let offending = ctx.partners.iter().find(|p| p.gov_supplier_count >= 3)?;

    Some(ScoreIndicator {
        kind: IndicatorKind::PartnerInManySuppliers,
        weight: IndicatorKind::PartnerInManySuppliers.weight(),
        description: "A partner holds ownership links in three or more government suppliers.".to_string(),
        evidence: format!("partner={} gov_supplier_count={}", offending.id, offending.gov_supplier_count),
    })
}

fn check_shared_address(ctx: &ScoreContext<'_>) -> Option<ScoreIndicator> {
    ctx.shares_address_with_another_supplier.then(|| ScoreIndicator {
        kind: IndicatorKind::SharedAddress,
        weight: IndicatorKind::SharedAddress.weight(),
        description: "Street and number match another supplier's registered address.".to_string(),
        evidence: format!(
            "street={} number={}",
            ctx.supplier.address.street, ctx.supplier.address.number
        ),
    })
}

fn check_exclusive_buyer(ctx: &ScoreContext<'_>) -> Option<ScoreIndicator> {
    if ctx.contracts.is_empty() {
        return None;
    }
    let distinct_orgs: HashSet<_> = ctx.contracts.iter().map(|c| &c.org_code).collect();

    (distinct_orgs.len() == 1).then(|| ScoreIndicator {
        kind: IndicatorKind::ExclusiveBuyer,
        weight: IndicatorKind::ExclusiveBuyer.weight(),
        description: "All contracts on file share a single government buyer.".to_string(),
        evidence: format!("org_code={}", ctx.contracts[0].org_code),
    })
}

fn check_no_employees(ctx: &ScoreContext<'_>) -> Option<ScoreIndicator> {
    if ctx.employee_count_evidence.is_some() {
        return None;
    }
    let has_service_contract = ctx.contracts.iter().any(|c| thresholds::looks_like_service_contract(&c.subject));

    has_service_contract.then(|| ScoreIndicator {
        kind: IndicatorKind::NoEmployees,
        weight: IndicatorKind::NoEmployees.weight(),
        description: "No employee-count evidence on file despite service contracts.".to_string(),
        evidence: "employee_count_evidence=absent".to_string(),
    })
}

fn check_sudden_growth(ctx: &ScoreContext<'_>) -> Option<ScoreIndicator> {
    let years: Vec<_> = ctx.yearly_contracted_totals.keys().copied().collect();

    for window in years.windows(2) {
        let (previous_year, current_year) = (window[0], window[1]);
        let previous = ctx.yearly_contracted_totals[&previous_year].as_decimal();
        let current = ctx.yearly_contracted_totals[&current_year].as_decimal();

        if previous.is_zero() {
            continue;
        }
        if current >= previous * Decimal::from(10) {
            return Some(ScoreIndicator {
                kind: IndicatorKind::SuddenGrowth,
                weight: IndicatorKind::SuddenGrowth.weight(),
                description: "Yearly contracted total grew at least tenfold year over year.".to_string(),
                evidence: format!(
                    "year={} previous={} current={}",
                    current_year, previous, current
                ),
            });
        }
    }
    None
}

fn check_historical_sanction(ctx: &ScoreContext<'_>) -> Option<ScoreIndicator> {
    let today = ctx.as_of.date_naive();
    let inactive_sanction = ctx.sanctions.iter().find(|s| !s.is_active(today))?;

    Some(ScoreIndicator {
        kind: IndicatorKind::HistoricalSanction,
        weight: IndicatorKind::HistoricalSanction.weight(),
        description: "Supplier has a past, now-expired sanction on file.".to_string(),
        evidence: format!("sanction={}", inactive_sanction.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use sentinel_domain_models::{
        Address, CadastralStatus, CompanyId, Contract, GovOrgCode, Money, Supplier,
    };
    use std::collections::BTreeMap;

    fn supplier(capital: &str, activity: &str, opening: NaiveDate) -> Supplier {
        Supplier {
            id: CompanyId::parse("11444777000161").unwrap(),
            legal_name: "Acme Fornecedora Ltda".to_string(),
            opening_date: opening,
            capital: Money::from_str_value(capital).unwrap(),
            primary_activity_code: activity.to_string(),
            address: Address {
                street: "Rua das Flores".to_string(),
                number: "100".to_string(),
                complement: None,
                city: "Brasilia".to_string(),
                state: "DF".to_string(),
            },
            cadastral_status: CadastralStatus::Active,
        }
    }

    fn contract(org: &str, value: &str, subject: &str, signing: NaiveDate) -> Contract {
        Contract::new(
            format!("contract-{org}-{value}"),
            GovOrgCode::parse(org).unwrap(),
            Money::from_str_value(value).unwrap(),
            subject.to_string(),
            None,
            signing,
            None,
        )
        .unwrap()
    }

    #[test]
    fn cumulative_moderate_score_scenario() {
        let opening = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let signing = opening + chrono::Duration::days(90);
        let supplier = supplier("1000.00", "4711", opening);
        // Two distinct buying orgs so EXCLUSIVE_BUYER does not also fire —
        // this scenario is meant to isolate LOW_CAPITAL + RECENT_COMPANY +
        // ACTIVITY_MISMATCH only (spec §8 scenario 5).
        let contracts = vec![
            contract("ORG1", "150000.00", "servico de limpeza predial", signing),
            contract("ORG2", "20000.00", "servico de manutencao", signing + chrono::Duration::days(10)),
        ];
        let totals = BTreeMap::new();

        let ctx = ScoreContext {
            supplier: &supplier,
            partners: &[],
            contracts: &contracts,
            sanctions: &[],
            shares_address_with_another_supplier: false,
            employee_count_evidence: Some(5),
            yearly_contracted_totals: &totals,
            as_of: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        };

        let breakdown = compute_cumulative_score(&ctx);
        assert_eq!(breakdown.total, 35);
        assert_eq!(breakdown.band, sentinel_domain_models::RiskBand::Moderate);
    }

    #[test]
    fn total_never_exceeds_one_hundred() {
        let opening = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let signing = opening + chrono::Duration::days(10);
        let supplier = supplier("1.00", "4711", opening);
        let contracts = vec![
            contract("ORG1", "999999.00", "servico diverso", signing),
        ];
        let mut totals = BTreeMap::new();
        totals.insert(2024, Money::from_str_value("1000.00").unwrap());
        totals.insert(2025, Money::from_str_value("50000.00").unwrap());

        let ctx = ScoreContext {
            supplier: &supplier,
            partners: &[],
            contracts: &contracts,
            sanctions: &[],
            shares_address_with_another_supplier: true,
            employee_count_evidence: None,
            yearly_contracted_totals: &totals,
            as_of: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        };

        let breakdown = compute_cumulative_score(&ctx);
        assert!(breakdown.total <= 100);
    }

    #[test]
    fn no_indicator_kind_appears_twice() {
        let opening = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let supplier = supplier("1.00", "4711", opening);
        let contracts = vec![contract("ORG1", "999999.00", "servico diverso", opening)];
        let totals = BTreeMap::new();

        let ctx = ScoreContext {
            supplier: &supplier,
            partners: &[],
            contracts: &contracts,
            sanctions: &[],
            shares_address_with_another_supplier: true,
            employee_count_evidence: None,
            yearly_contracted_totals: &totals,
            as_of: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        };

        let breakdown = compute_cumulative_score(&ctx);
        let kinds: HashSet<_> = breakdown.indicators.iter().map(|i| i.kind).collect();
        assert_eq!(kinds.len(), breakdown.indicators.len());
    }
}
