//! Domain layer for order totals.
//!
//! This crate provides:
//! - [`Money`], an integer minor-unit amount whose arithmetic refuses to mix
//!   currencies
//! - [`Order`] and [`Item`], immutable order snapshots
//! - [`Order::compute_total`], which sums item prices in the order's currency

pub mod money;
pub mod order;

pub use common::CurrencyCode;
pub use money::{Money, MoneyError};
pub use order::{Item, ItemId, Order, OrderError, OrderId};
