use serde::{Deserialize, Serialize};

use crate::currency;

/// ISO 4217 alphabetic currency code, e.g. `"INR"`.
///
/// Codes are trimmed and upper-cased on construction so that `"inr"` and
/// `"INR"` name the same currency. No other validation happens here: an
/// unknown code is still a valid `CurrencyCode`, it just has no entry in
/// the ISO set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code, normalizing it to upper case.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits after the decimal separator for this currency.
    ///
    /// Falls back to [`DEFAULT_MINOR_UNITS`](crate::DEFAULT_MINOR_UNITS) for
    /// codes missing from the ISO set.
    pub fn minor_units(&self) -> u32 {
        currency::minor_units(&self.0)
    }

    /// Number of minor units in one major unit (100 for INR, 1 for UGX).
    pub fn minor_per_major(&self) -> u64 {
        10_u64.pow(self.minor_units())
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&CurrencyCode> for CurrencyCode {
    fn from(code: &CurrencyCode) -> Self {
        code.clone()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
