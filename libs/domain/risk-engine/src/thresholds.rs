// [libs/domain/risk-engine/src/thresholds.rs]
//! Curated lookup tables for `LOW_CAPITAL` and `ACTIVITY_MISMATCH`. The spec
//! requires their presence but, by design, does not fix their contents
//! (§9 Open Questions); the values below are illustrative defaults, easy to
//! replace with a real curated table without touching the rule logic.

use rust_decimal::Decimal;
use sentinel_domain_models::Money;

/// Broad economic-activity category used by both the capital threshold and
/// the activity/contract-subject mismatch check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Commerce,
    Services,
    Construction,
    Industry,
}

/// Maps a primary activity code (CNAE-shaped) to a broad category. Matches
/// on the two-digit division prefix; unknown prefixes return `None`, and an
/// unknown code never triggers `ACTIVITY_MISMATCH` (the predicate needs both
/// sides known to assert a mismatch).
pub fn activity_category(code: &str) -> Option<ActivityCategory> {
    let division = code.get(0..2)?;
    match division {
        "45" | "46" | "47" => Some(ActivityCategory::Commerce),
        "41" | "42" | "43" => Some(ActivityCategory::Construction),
        "10" | "11" | "12" | "13" | "14" | "15" | "16" | "20" | "25" | "28" | "29" => {
            Some(ActivityCategory::Industry)
        }
        "62" | "63" | "69" | "70" | "71" | "73" | "74" | "77" | "78" | "80" | "81" | "82" | "96" => {
            Some(ActivityCategory::Services)
        }
        _ => None,
    }
}

/// Best-effort classification of a contract's subject text into the same
/// category space, via keyword matching. Returns `None` (unknown) rather
/// than guessing when no keyword matches.
pub fn subject_category(subject: &str) -> Option<ActivityCategory> {
    let lowered = subject.to_lowercase();
    let keyword_hits: &[(&str, ActivityCategory)] = &[
        ("servico", ActivityCategory::Services),
        ("service", ActivityCategory::Services),
        ("consultoria", ActivityCategory::Services),
        ("limpeza", ActivityCategory::Services),
        ("manutencao", ActivityCategory::Services),
        ("obra", ActivityCategory::Construction),
        ("construcao", ActivityCategory::Construction),
        ("reforma", ActivityCategory::Construction),
        ("fornecimento", ActivityCategory::Commerce),
        ("aquisicao", ActivityCategory::Commerce),
        ("compra", ActivityCategory::Commerce),
        ("equipamento", ActivityCategory::Industry),
        ("fabricacao", ActivityCategory::Industry),
    ];

    keyword_hits
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, category)| *category)
}

/// `true` when `subject_category` resolves to the "services" bucket,
/// used by the `NO_EMPLOYEES` indicator.
pub fn looks_like_service_contract(subject: &str) -> bool {
    matches!(subject_category(subject), Some(ActivityCategory::Services))
}

/// Per-sector minimum-capital threshold: service activities tolerate a
/// lower floor than commerce (§4.2).
pub fn low_capital_threshold(code: &str) -> Money {
    let amount = match activity_category(code) {
        Some(ActivityCategory::Services) => Decimal::new(5_000_00, 2),
        Some(ActivityCategory::Commerce) => Decimal::new(20_000_00, 2),
        Some(ActivityCategory::Construction) | Some(ActivityCategory::Industry) => Decimal::new(25_000_00, 2),
        None => Decimal::new(20_000_00, 2),
    };
    Money::new(amount).expect("static threshold constants are always non-negative")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commerce_and_services_disagree_on_category() {
        assert_eq!(activity_category("4711"), Some(ActivityCategory::Commerce));
        assert_eq!(activity_category("6920"), Some(ActivityCategory::Services));
    }

    #[test]
    fn services_threshold_is_lower_than_commerce() {
        assert!(low_capital_threshold("6920").as_decimal() < low_capital_threshold("4711").as_decimal());
    }
}
