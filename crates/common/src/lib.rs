//! Shared types for the order totals workspace.
//!
//! This crate provides the currency primitives used by the domain layer:
//! - [`CurrencyCode`], a normalized ISO 4217 alpha code
//! - [`currency`], minor-unit lookup over the ISO 4217 set

pub mod currency;
pub mod types;

pub use currency::DEFAULT_MINOR_UNITS;
pub use types::CurrencyCode;
