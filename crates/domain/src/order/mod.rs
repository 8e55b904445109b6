//! Orders and their totals.

mod model;
mod value_objects;

pub use model::Order;
pub use value_objects::{Item, ItemId, OrderId};

use thiserror::Error;

use crate::money::MoneyError;

/// Errors that can occur while computing an order total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// An item's unit price could not be added to the running total.
    #[error("not adding item elements, order {order_id}, item {item_id}: {source}")]
    ItemAddition {
        order_id: OrderId,
        item_id: ItemId,
        #[source]
        source: MoneyError,
    },
}
