//! Currency-safe money.

use common::CurrencyCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by [`Money`] arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The operands are expressed in different currencies.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        expected: CurrencyCode,
        found: CurrencyCode,
    },

    /// The result does not fit in the minor-unit amount.
    #[error("amount overflow during {operation}")]
    Overflow { operation: &'static str },
}

/// An amount in minor units (paise for INR, cents for USD) tagged with its
/// currency.
///
/// Arithmetic never mixes currencies: every binary operation checks the
/// codes first and returns [`MoneyError::CurrencyMismatch`] when they differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: CurrencyCode,
}

impl Money {
    /// Creates a Money value from a minor-unit amount and a currency code.
    pub fn new(amount: i64, currency: impl Into<CurrencyCode>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Returns zero in the given currency.
    pub fn zero(currency: impl Into<CurrencyCode>) -> Self {
        Self::new(0, currency)
    }

    /// Returns the amount in minor units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns true if both values share a currency code.
    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Returns the absolute value.
    pub fn absolute(&self) -> Result<Money, MoneyError> {
        self.amount
            .checked_abs()
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow {
                operation: "absolute",
            })
    }

    /// Returns the value with its sign flipped.
    pub fn negative(&self) -> Result<Money, MoneyError> {
        self.amount
            .checked_neg()
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow {
                operation: "negative",
            })
    }

    /// Adds another amount of the same currency.
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow { operation: "add" })
    }

    /// Subtracts another amount of the same currency.
    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow {
                operation: "subtract",
            })
    }

    /// Multiplies by a scalar factor.
    pub fn multiply(&self, factor: i64) -> Result<Money, MoneyError> {
        self.amount
            .checked_mul(factor)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow {
                operation: "multiply",
            })
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.clone(),
                found: other.currency.clone(),
            })
        }
    }

    fn with_amount(&self, amount: i64) -> Money {
        Money {
            amount,
            currency: self.currency.clone(),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        let scale = self.currency.minor_per_major();

        if scale == 1 {
            return write!(f, "{sign}{abs} {}", self.currency);
        }

        write!(
            f,
            "{sign}{}.{:0width$} {}",
            abs / scale,
            abs % scale,
            self.currency,
            width = self.currency.minor_units() as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_new_and_accessors() {
        let money = Money::new(1234, "inr");
        assert_eq!(money.amount(), 1234);
        assert_eq!(money.currency(), &CurrencyCode::new("INR"));
    }

    #[test]
    fn test_money_zero() {
        let zero = Money::zero("USD");
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert_eq!(zero.currency().as_str(), "USD");
    }

    #[test]
    fn test_money_add_same_currency() {
        let a = Money::new(1000, "INR");
        let b = Money::new(500, "INR");
        assert_eq!(a.add(&b).unwrap(), Money::new(1500, "INR"));
    }

    #[test]
    fn test_money_add_currency_mismatch() {
        let err = Money::new(100, "INR").add(&Money::new(50, "USD")).unwrap_err();
        assert_eq!(
            err,
            MoneyError::CurrencyMismatch {
                expected: CurrencyCode::new("INR"),
                found: CurrencyCode::new("USD"),
            }
        );
        assert_eq!(err.to_string(), "currency mismatch: expected INR, found USD");
    }

    #[test]
    fn test_money_add_ignores_code_case() {
        let sum = Money::new(1, "eur").add(&Money::new(2, "EUR")).unwrap();
        assert_eq!(sum.amount(), 3);
    }

    #[test]
    fn test_money_add_overflow() {
        let err = Money::new(i64::MAX, "INR")
            .add(&Money::new(1, "INR"))
            .unwrap_err();
        assert_eq!(err, MoneyError::Overflow { operation: "add" });
    }

    #[test]
    fn test_money_subtract() {
        let a = Money::new(100, "GBP");
        let b = Money::new(130, "GBP");
        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff.amount(), -30);
        assert!(diff.is_negative());
        assert!(a.subtract(&Money::new(1, "EUR")).is_err());
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!(Money::new(250, "INR").multiply(3).unwrap().amount(), 750);
        assert!(Money::new(i64::MAX, "INR").multiply(2).is_err());
    }

    #[test]
    fn test_money_sign_transforms() {
        let money = Money::new(-40, "USD");
        assert_eq!(money.absolute().unwrap().amount(), 40);
        assert_eq!(money.negative().unwrap().amount(), 40);
        assert!(Money::new(i64::MIN, "USD").absolute().is_err());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(100, "INR").to_string(), "1.00 INR");
        assert_eq!(Money::new(5, "USD").to_string(), "0.05 USD");
        assert_eq!(Money::new(-1234, "EUR").to_string(), "-12.34 EUR");
        assert_eq!(Money::new(500, "JPY").to_string(), "500 JPY");
        assert_eq!(Money::new(-1250, "KWD").to_string(), "-1.250 KWD");
        assert_eq!(Money::new(7, "XYZ").to_string(), "0.07 XYZ");
    }

    #[test]
    fn test_money_display_uses_iso_minor_units() {
        assert_eq!(Money::new(500, "UGX").to_string(), "500 UGX");
        assert_eq!(Money::new(500, "XAF").to_string(), "500 XAF");
        assert_eq!(Money::new(1250, "IQD").to_string(), "1.250 IQD");
        assert_eq!(Money::new(1250, "LYD").to_string(), "1.250 LYD");
    }

    #[test]
    fn test_money_serialization() {
        let money = Money::new(999, "INR");
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, r#"{"amount":999,"currency":"INR"}"#);
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(money, deserialized);
    }
}
