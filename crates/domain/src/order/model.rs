//! The order value and its total computation.

use common::CurrencyCode;
use serde::{Deserialize, Serialize};

use crate::money::Money;

use super::{Item, OrderError, OrderId};

/// An order: a settlement currency and an ordered list of items.
///
/// Orders are immutable snapshots. The total is always expressed in
/// [`Order::currency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// The order identifier.
    pub id: OrderId,

    /// Currency the total is expressed in.
    pub currency: CurrencyCode,

    /// Items in the order, in the sequence they were listed.
    pub items: Vec<Item>,
}

impl Order {
    /// Creates a new order.
    pub fn new(
        id: impl Into<OrderId>,
        currency: impl Into<CurrencyCode>,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        Self {
            id: id.into(),
            currency: currency.into(),
            items: items.into_iter().collect(),
        }
    }

    /// Returns the order ID.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the settlement currency.
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns the items in sequence order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Computes the order total.
    ///
    /// Sums every item's unit price, once per item, starting from zero in the
    /// order's currency. Quantities are not applied. Summation stops at the
    /// first item whose price cannot be added to the running total, and that
    /// failure is returned; no partial total is exposed.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(order_id = %self.id, currency = %self.currency, items = self.items.len())
    )]
    pub fn compute_total(&self) -> Result<Money, OrderError> {
        let total = self
            .items
            .iter()
            .try_fold(Money::zero(&self.currency), |total, item| {
                total.add(&item.unit_price).map_err(|source| {
                    tracing::debug!(item_id = %item.id, error = %source, "failed to add item price");
                    OrderError::ItemAddition {
                        order_id: self.id.clone(),
                        item_id: item.id.clone(),
                        source,
                    }
                })
            })?;

        tracing::debug!(%total, "computed order total");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::MoneyError;

    fn inr(amount: i64) -> Money {
        Money::new(amount, "INR")
    }

    #[test]
    fn test_empty_order_totals_zero_in_order_currency() {
        let order = Order::new("100", "INR", []);
        let total = order.compute_total().unwrap();
        assert_eq!(total, Money::zero("INR"));
    }

    #[test]
    fn test_total_sums_unit_prices() {
        let order = Order::new(
            "100",
            "INR",
            [Item::new("1", 1, inr(100)), Item::new("2", 1, inr(250))],
        );
        assert_eq!(order.compute_total().unwrap(), inr(350));
    }

    #[test]
    fn test_total_ignores_quantity() {
        let order = Order::new("100", "INR", [Item::new("500", 2, inr(100))]);
        assert_eq!(order.compute_total().unwrap().amount(), 100);
    }

    #[test]
    fn test_total_fails_on_currency_mismatch() {
        let order = Order::new(
            "100",
            "INR",
            [
                Item::new("1", 1, inr(100)),
                Item::new("2", 1, Money::new(50, "USD")),
            ],
        );

        let err = order.compute_total().unwrap_err();
        let OrderError::ItemAddition {
            order_id,
            item_id,
            source,
        } = err;
        assert_eq!(order_id.as_str(), "100");
        assert_eq!(item_id.as_str(), "2");
        assert!(matches!(source, MoneyError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_total_quantity_and_item_count() {
        let order = Order::new(
            "100",
            "INR",
            [Item::new("1", 2, inr(1)), Item::new("2", 5, inr(1))],
        );
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.total_quantity(), 7);
        assert_eq!(order.items().next().unwrap().id.as_str(), "1");
    }
}
