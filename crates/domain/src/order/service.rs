//! Order service providing named operations over a persistence adapter.

use common::OrderId;
use order_store::OrderStore;

use crate::error::DomainError;

use super::{Order, OrderStatus, PlaceOrder, UpdateOrder};

/// Service for managing orders.
///
/// Each operation reconstructs a fresh aggregate from the store, applies a
/// named domain operation, and persists the resulting snapshot. Saves are
/// upserts keyed by identity, so concurrent writers are last-write-wins.
pub struct OrderService<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    /// Creates a new order service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates and persists a new order.
    #[tracing::instrument(skip(self, cmd))]
    pub async fn place_order(&self, cmd: PlaceOrder) -> Result<Order, DomainError> {
        let order = Order::create(cmd.items, cmd.shipping_address, cmd.discount_code)?;

        if let Some(code) = order.discount_code().filter(|c| !c.is_recognized()) {
            tracing::debug!(code = %code, "discount code not recognized, stored inert");
        }

        self.store.save(order.to_record()).await?;
        metrics::counter!("orders_placed_total").increment(1);
        tracing::info!(order_id = %order.id(), total = %order.calculate_total(), "order placed");
        Ok(order)
    }

    /// Loads all orders.
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        let records = self.store.find_all().await?;
        records
            .iter()
            .map(|record| Order::from_record(record).map_err(DomainError::from))
            .collect()
    }

    /// Loads an order by id. Returns None if the order doesn't exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let record = self.store.find_by_id(id).await?;
        record
            .as_ref()
            .map(Order::from_record)
            .transpose()
            .map_err(DomainError::from)
    }

    /// Applies the requested updates to an order and persists it.
    ///
    /// A requested Completed status goes through the guarded `complete`
    /// transition; a requested Created status on a Created order is a no-op.
    #[tracing::instrument(skip(self, cmd))]
    pub async fn update_order(&self, id: &OrderId, cmd: UpdateOrder) -> Result<Order, DomainError> {
        let mut order = self.load_existing(id).await?;

        if let Some(address) = cmd.shipping_address {
            order.update_shipping_address(address);
        }

        if let Some(code) = cmd.discount_code {
            if !code.is_recognized() {
                tracing::debug!(code = %code, "discount code not recognized, stored inert");
            }
            order.update_discount_code(Some(code));
        }

        match cmd.status {
            Some(OrderStatus::Completed) => order.complete()?,
            Some(OrderStatus::Created) | None => {}
        }

        self.store.save(order.to_record()).await?;
        metrics::counter!("orders_updated_total").increment(1);
        Ok(order)
    }

    /// Completes an order via the guarded Created → Completed transition.
    #[tracing::instrument(skip(self))]
    pub async fn complete_order(&self, id: &OrderId) -> Result<Order, DomainError> {
        let mut order = self.load_existing(id).await?;
        order.complete()?;
        self.store.save(order.to_record()).await?;
        metrics::counter!("orders_completed_total").increment(1);
        tracing::info!(order_id = %id, "order completed");
        Ok(order)
    }

    /// Deletes an order by identity.
    #[tracing::instrument(skip(self))]
    pub async fn delete_order(&self, id: &OrderId) -> Result<(), DomainError> {
        if !self.store.delete(id).await? {
            return Err(DomainError::NotFound(id.to_string()));
        }
        metrics::counter!("orders_deleted_total").increment(1);
        Ok(())
    }

    async fn load_existing(&self, id: &OrderId) -> Result<Order, DomainError> {
        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        Ok(Order::from_record(&record)?)
    }
}
