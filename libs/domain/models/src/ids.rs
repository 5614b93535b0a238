// [libs/domain/models/src/ids.rs]
/*!
 * Opaque identifier value types.
 *
 * `CompanyId` and `PersonId` wrap digit-only strings validated against the
 * published two-check-digit modulo-11 algorithm for their length (14 and 11
 * digits respectively). Construction is the only place the checksum is
 * checked; once built, a value is assumed valid everywhere else.
 *
 * `PersonId` never appears in persisted form (see crate docs / spec §6):
 * only `PersonIdHash`, an opaque already-hashed string produced by the
 * external ingestion pipeline, is stored or transported. This crate never
 * computes that hash — it only carries the opaque value through.
 */

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strips dots, slashes and dashes, keeping only ASCII digits.
fn strip_punctuation(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Weighted modulo-11 check digit per the standard algorithm used by
/// both `CompanyId` (CNPJ-shaped) and `PersonId` (CPF-shaped) identifiers.
fn modulo11_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

fn to_digit_vec(s: &str) -> Option<Vec<u32>> {
    s.chars().map(|c| c.to_digit(10)).collect()
}

/// 14-digit company identifier (two weighted modulo-11 check digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(String);

impl CompanyId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits = strip_punctuation(raw);
        if digits.len() != 14 {
            return Err(DomainError::InvalidId(format!(
                "company id must have 14 digits, got {}",
                digits.len()
            )));
        }
        let values = to_digit_vec(&digits)
            .ok_or_else(|| DomainError::InvalidId("company id contains non-digit characters".into()))?;

        let first_weights = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
        let first_check = modulo11_check_digit(&values[..12], &first_weights);
        if first_check != values[12] {
            return Err(DomainError::InvalidId("company id checksum mismatch (digit 13)".into()));
        }

        let second_weights = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
        let second_check = modulo11_check_digit(&values[..13], &second_weights);
        if second_check != values[13] {
            return Err(DomainError::InvalidId("company id checksum mismatch (digit 14)".into()));
        }

        Ok(Self(digits))
    }

    /// Canonical digits-only representation, as stored and transported.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 11-digit natural-person identifier (two weighted modulo-11 check digits).
///
/// This type exists so the checksum can be validated at the ingestion
/// boundary; it must never be logged, stored or returned in this service —
/// only [`PersonIdHash`] crosses that boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonId(String);

impl PersonId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits = strip_punctuation(raw);
        if digits.len() != 11 {
            return Err(DomainError::InvalidId(format!(
                "person id must have 11 digits, got {}",
                digits.len()
            )));
        }
        let values = to_digit_vec(&digits)
            .ok_or_else(|| DomainError::InvalidId("person id contains non-digit characters".into()))?;

        // reject the well-known all-same-digit non-ids, which satisfy the
        // arithmetic checksum vacuously but are never valid in practice.
        if values.iter().all(|d| *d == values[0]) {
            return Err(DomainError::InvalidId("person id is a degenerate repeated-digit sequence".into()));
        }

        let first_weights = [10, 9, 8, 7, 6, 5, 4, 3, 2];
        let first_check = modulo11_check_digit(&values[..9], &first_weights);
        if first_check != values[9] {
            return Err(DomainError::InvalidId("person id checksum mismatch (digit 10)".into()));
        }

        let second_weights = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
        let second_check = modulo11_check_digit(&values[..10], &second_weights);
        if second_check != values[10] {
            return Err(DomainError::InvalidId("person id checksum mismatch (digit 11)".into()));
        }

        Ok(Self(digits))
    }

    /// The last four digits only, safe to appear in logs per §7.
    pub fn redacted(&self) -> &str {
        &self.0[self.0.len() - 4..]
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***{}", self.redacted())
    }
}

/// Opaque keyed-hash identifier for a partner, as it appears in persisted
/// form and in graph node identities. The hash itself is computed upstream
/// by the ingestion pipeline with a secret key held only in its own
/// environment configuration; this core treats the value as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonIdHash(String);

impl PersonIdHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonIdHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque, length-bounded government-body code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GovOrgCode(String);

impl GovOrgCode {
    pub const MAX_LEN: usize = 32;

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() || raw.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidId(format!(
                "gov org code must be 1..={} bytes, got {}",
                Self::MAX_LEN,
                raw.len()
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GovOrgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque, length-bounded economic-activity classification code (CNAE-shaped).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CnaeCode(String);

impl CnaeCode {
    pub const MAX_LEN: usize = 16;

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() || raw.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidId(format!(
                "CNAE code must be 1..={} bytes, got {}",
                Self::MAX_LEN,
                raw.len()
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CnaeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque, length-bounded public-tender identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenderNumber(String);

impl TenderNumber {
    pub const MAX_LEN: usize = 64;

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() || raw.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidId(format!(
                "tender number must be 1..={} bytes, got {}",
                Self::MAX_LEN,
                raw.len()
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A real, checksum-valid CNPJ (digits only).
    const VALID_COMPANY_ID: &str = "11444777000161";

    /// A real, checksum-valid CPF (digits only).
    const VALID_PERSON_ID: &str = "52998224725";

    #[test]
    fn accepts_valid_company_id() {
        assert!(CompanyId::parse(VALID_COMPANY_ID).is_ok());
    }

    #[test]
    fn accepts_valid_company_id_with_punctuation() {
        assert!(CompanyId::parse("11.444.777/0001-61").is_ok());
    }

    #[test]
    fn rejects_company_id_with_bad_checksum() {
        let mut mutated = VALID_COMPANY_ID.as_bytes().to_vec();
        mutated[13] = b'0' + (mutated[13] - b'0' + 1) % 10;
        let mutated = String::from_utf8(mutated).unwrap();
        assert!(CompanyId::parse(&mutated).is_err());
    }

    #[test]
    fn rejects_company_id_with_wrong_length() {
        assert!(matches!(CompanyId::parse("123"), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn company_id_round_trips_through_canonical_digits() {
        let id = CompanyId::parse(VALID_COMPANY_ID).unwrap();
        let reparsed = CompanyId::parse(id.as_str()).unwrap();
        assert_eq!(id, reparsed);
    }

    #[test]
    fn accepts_valid_person_id() {
        assert!(PersonId::parse(VALID_PERSON_ID).is_ok());
    }

    #[test]
    fn rejects_repeated_digit_person_id() {
        assert!(PersonId::parse("11111111111").is_err());
    }

    #[test]
    fn person_id_display_never_prints_plain_digits() {
        let id = PersonId::parse(VALID_PERSON_ID).unwrap();
        let rendered = format!("{id}");
        assert!(!rendered.contains(&VALID_PERSON_ID[..7]));
        assert!(rendered.ends_with(&VALID_PERSON_ID[7..]));
    }
}
