//! ISO 4217 currency lookup, backed by the `rusty_money` ISO set.

use rusty_money::{FormattableCurrency, iso};

pub use rusty_money::iso::Currency;

/// Minor-unit exponent used for codes missing from the ISO set.
pub const DEFAULT_MINOR_UNITS: u32 = 2;

/// Looks up a currency by its alphabetic code.
///
/// The lookup is exact; callers normalize case through
/// [`CurrencyCode`](crate::CurrencyCode).
pub fn lookup(code: &str) -> Option<&'static Currency> {
    iso::find(code)
}

/// Digits after the decimal separator for `code` (2 for INR, 0 for UGX,
/// 3 for IQD).
pub fn minor_units(code: &str) -> u32 {
    lookup(code).map_or(DEFAULT_MINOR_UNITS, |currency| currency.exponent())
}
