//! Order aggregate implementation.

use common::OrderId;
use order_store::OrderRecord;

use crate::error::ValidationError;

use super::{Address, DiscountCode, OrderItem, OrderStatus};

/// Order aggregate root.
///
/// Owns its items, shipping address, status, and discount code. Items are set
/// once at creation; the address and discount code change only through named
/// operations; the status moves once from Created to Completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    items: Vec<OrderItem>,
    shipping_address: Address,
    status: OrderStatus,
    discount_code: Option<DiscountCode>,
}

impl Order {
    /// Creates a new order with a fresh id and Created status.
    ///
    /// The non-empty-items invariant is checked here, once, and never again.
    pub fn create(
        items: Vec<OrderItem>,
        shipping_address: Address,
        discount_code: Option<DiscountCode>,
    ) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::NoItems);
        }

        Ok(Self {
            id: OrderId::new(),
            items,
            shipping_address,
            status: OrderStatus::Created,
            discount_code,
        })
    }

    /// Rehydrates an order from a persisted record.
    ///
    /// Trusts the store for aggregate-level state: the stored id and status
    /// are preserved exactly and the non-empty-items check is not re-run.
    /// Value-object construction invariants still apply to every field.
    pub fn from_record(record: &OrderRecord) -> Result<Self, ValidationError> {
        let items = record
            .items
            .iter()
            .map(OrderItem::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        let status = OrderStatus::parse(&record.status)
            .ok_or_else(|| ValidationError::UnknownStatus(record.status.clone()))?;

        Ok(Self {
            id: OrderId::from_string(record.id.clone()),
            items,
            shipping_address: Address::new(record.shipping_address.clone())?,
            status,
            discount_code: record
                .discount_code
                .as_deref()
                .and_then(DiscountCode::parse),
        })
    }

    /// Returns the order identity.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the line items.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the shipping address.
    pub fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the discount code, if any.
    pub fn discount_code(&self) -> Option<&DiscountCode> {
        self.discount_code.as_ref()
    }

    /// Returns true once the order has been completed.
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    /// Computes the order total: the sum of item subtotals, reduced by 20%
    /// when the recognized discount code is present.
    ///
    /// The total is derived on demand and never cached in the aggregate.
    pub fn calculate_total(&self) -> super::PositiveNumber {
        let subtotal = self
            .items
            .iter()
            .fold(super::PositiveNumber::zero(), |acc, item| {
                acc.add(item.subtotal())
            });

        match &self.discount_code {
            Some(code) => subtotal.multiply(code.multiplier()),
            None => subtotal,
        }
    }

    /// Transitions the order from Created to Completed.
    ///
    /// Fails when the order is not in Created status; a second call fails.
    pub fn complete(&mut self) -> Result<(), ValidationError> {
        if !self.status.can_complete() {
            return Err(ValidationError::InvalidStatusTransition(self.status));
        }
        self.status = OrderStatus::Completed;
        Ok(())
    }

    /// Replaces the shipping address unconditionally.
    pub fn update_shipping_address(&mut self, new_address: Address) {
        self.shipping_address = new_address;
    }

    /// Replaces the discount code unconditionally. The total is recomputed
    /// lazily via `calculate_total`, not eagerly.
    pub fn update_discount_code(&mut self, code: Option<DiscountCode>) {
        self.discount_code = code;
    }

    /// Produces the transfer shape used for persistence and HTTP responses.
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            id: self.id.to_string(),
            items: self.items.iter().map(OrderItem::to_record).collect(),
            shipping_address: self.shipping_address.as_str().to_string(),
            status: self.status.as_str().to_string(),
            discount_code: self.discount_code.as_ref().map(|c| c.as_str().to_string()),
            total: Some(self.calculate_total().value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::PositiveNumber;

    fn item(quantity: f64, price: f64) -> OrderItem {
        OrderItem::new(
            OrderId::new(),
            PositiveNumber::new(quantity).unwrap(),
            PositiveNumber::new(price).unwrap(),
        )
    }

    fn address() -> Address {
        Address::new("123 Main St").unwrap()
    }

    #[test]
    fn create_order_with_valid_fields() {
        let order = Order::create(
            vec![item(1.0, 10.0), item(2.0, 20.0)],
            address(),
            DiscountCode::parse("DISCOUNT20"),
        )
        .unwrap();

        assert!(order.id().is_valid());
        assert_eq!(order.status(), OrderStatus::Created);
        assert!(!order.is_completed());
        assert_eq!(order.items().len(), 2);
    }

    #[test]
    fn create_order_without_items_fails() {
        let err = Order::create(vec![], address(), None).unwrap_err();
        assert_eq!(err.to_string(), "The order must have at least one item");
    }

    #[test]
    fn total_for_single_item() {
        let order = Order::create(vec![item(1.0, 10.0)], address(), None).unwrap();
        assert_eq!(order.calculate_total().value(), 10.0);
    }

    #[test]
    fn total_sums_item_subtotals() {
        let order = Order::create(vec![item(2.0, 10.0), item(2.0, 10.0)], address(), None).unwrap();
        assert_eq!(order.calculate_total().value(), 40.0);
    }

    #[test]
    fn total_applies_recognized_discount() {
        let order = Order::create(
            vec![item(2.0, 10.0), item(2.0, 10.0)],
            address(),
            DiscountCode::parse("DISCOUNT20"),
        )
        .unwrap();
        assert_eq!(order.calculate_total().value(), 32.0);
    }

    #[test]
    fn total_ignores_unrecognized_discount() {
        let order = Order::create(
            vec![item(2.0, 10.0)],
            address(),
            DiscountCode::parse("SUMMER50"),
        )
        .unwrap();
        assert_eq!(order.calculate_total().value(), 20.0);
    }

    #[test]
    fn complete_sets_status_to_completed() {
        let mut order = Order::create(vec![item(1.0, 10.0)], address(), None).unwrap();
        order.complete().unwrap();
        assert!(order.is_completed());
        assert_eq!(order.status(), OrderStatus::Completed);
    }

    #[test]
    fn complete_twice_fails_with_current_status() {
        let mut order = Order::create(vec![item(1.0, 10.0)], address(), None).unwrap();
        order.complete().unwrap();

        let err = order.complete().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot complete an order with status: COMPLETED"
        );
        assert!(order.is_completed());
    }

    #[test]
    fn update_shipping_address_replaces_unconditionally() {
        let mut order = Order::create(vec![item(1.0, 10.0)], address(), None).unwrap();
        order.complete().unwrap();

        let new_address = Address::new("456 Oak Ave").unwrap();
        order.update_shipping_address(new_address.clone());
        assert_eq!(order.shipping_address(), &new_address);
    }

    #[test]
    fn update_discount_code_recomputes_total_lazily() {
        let mut order = Order::create(vec![item(2.0, 10.0), item(2.0, 10.0)], address(), None).unwrap();
        assert_eq!(order.calculate_total().value(), 40.0);

        order.update_discount_code(DiscountCode::parse("DISCOUNT20"));
        assert_eq!(order.calculate_total().value(), 32.0);

        order.update_discount_code(None);
        assert_eq!(order.calculate_total().value(), 40.0);
    }

    #[test]
    fn record_roundtrip_preserves_everything() {
        let order = Order::create(
            vec![item(2.0, 10.0), item(1.0, 5.5)],
            address(),
            DiscountCode::parse("DISCOUNT20"),
        )
        .unwrap();

        let record = order.to_record();
        let rebuilt = Order::from_record(&record).unwrap();

        assert_eq!(rebuilt, order);
        assert_eq!(rebuilt.id(), order.id());
        assert_eq!(rebuilt.status(), order.status());
        assert_eq!(rebuilt.discount_code(), order.discount_code());
    }

    #[test]
    fn from_record_preserves_completed_status() {
        let mut order = Order::create(vec![item(1.0, 10.0)], address(), None).unwrap();
        order.complete().unwrap();

        let rebuilt = Order::from_record(&order.to_record()).unwrap();
        assert!(rebuilt.is_completed());
    }

    #[test]
    fn from_record_accepts_foreign_ids() {
        let mut record = Order::create(vec![item(1.0, 10.0)], address(), None)
            .unwrap()
            .to_record();
        record.id = "legacy-mongo-id".to_string();

        let rebuilt = Order::from_record(&record).unwrap();
        assert_eq!(rebuilt.id().as_str(), "legacy-mongo-id");
    }

    #[test]
    fn from_record_rejects_unknown_status() {
        let mut record = Order::create(vec![item(1.0, 10.0)], address(), None)
            .unwrap()
            .to_record();
        record.status = "SHIPPED".to_string();

        assert!(matches!(
            Order::from_record(&record),
            Err(ValidationError::UnknownStatus(_))
        ));
    }

    #[test]
    fn record_carries_denormalized_total() {
        let order = Order::create(vec![item(1.0, 100.0)], address(), None).unwrap();
        assert_eq!(order.to_record().total, Some(100.0));
    }
}
