// [libs/domain/models/src/money.rs]
//! Fixed-point decimal value types. Monetary quantities never use binary
//! floating point (spec §3): `Money` wraps a non-negative `rust_decimal::Decimal`
//! normalized to exactly two fractional digits.

use crate::errors::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-negative money amount, exact to two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() {
            return Err(DomainError::InvalidAmount(format!("money cannot be negative: {value}")));
        }
        Ok(Self(value.round_dp(2)))
    }

    pub fn from_str_value(raw: &str) -> Result<Self, DomainError> {
        let parsed = Decimal::from_str(raw)
            .map_err(|e| DomainError::InvalidAmount(format!("'{raw}' is not a decimal: {e}")))?;
        Self::new(parsed)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(&self, other: &Money) -> Money {
        Money((self.0 + other.0).round_dp(2))
    }
}

impl TryFrom<String> for Money {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Percentage share in the closed interval `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Share(Decimal);

impl Share {
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value < Decimal::ZERO || value > Decimal::from(100) {
            return Err(DomainError::InvalidAmount(format!("share must be within [0,100]: {value}")));
        }
        Ok(Self(value))
    }

    pub fn from_str_value(raw: &str) -> Result<Self, DomainError> {
        let parsed = Decimal::from_str(raw)
            .map_err(|e| DomainError::InvalidAmount(format!("'{raw}' is not a decimal: {e}")))?;
        Self::new(parsed)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<String> for Share {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

impl From<Share> for String {
    fn from(value: Share) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_money() {
        assert!(Money::from_str_value("-1.00").is_err());
    }

    #[test]
    fn rounds_to_two_fractional_digits() {
        let money = Money::from_str_value("10.005").unwrap();
        assert_eq!(money.to_string(), "10.01");
    }

    #[test]
    fn addition_stays_exact_to_two_digits() {
        let a = Money::from_str_value("10.10").unwrap();
        let b = Money::from_str_value("0.05").unwrap();
        assert_eq!(a.checked_add(&b).to_string(), "10.15");
    }

    #[test]
    fn share_rejects_out_of_range() {
        assert!(Share::from_str_value("100.01").is_err());
        assert!(Share::from_str_value("-0.01").is_err());
        assert!(Share::from_str_value("100.00").is_ok());
    }
}
