//! Order CRUD and completion endpoints.
//!
//! Handlers translate HTTP-shaped payloads into value-object construction and
//! named domain operations, and map domain errors to status codes.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::OrderId;
use domain::{
    Address, DiscountCode, DomainError, OrderItem, OrderService, OrderStatus, PlaceOrder,
    PositiveNumber, UpdateOrder, ValidationError,
};
use order_store::{OrderRecord, OrderStore};
use serde::Deserialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub order_service: OrderService<S>,
}

// -- Request types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
    pub shipping_address: String,
    pub discount_code: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: f64,
    pub price: f64,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    pub shipping_address: Option<String>,
    pub discount_code: Option<String>,
}

// -- Handlers --

/// POST /orders — create a new order from line items.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<String, ApiError> {
    let items = req
        .items
        .iter()
        .map(|item| {
            Ok(OrderItem::new(
                OrderId::from_string(item.product_id.clone()),
                PositiveNumber::new(item.quantity)?,
                PositiveNumber::new(item.price)?,
            ))
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let shipping_address = Address::new(req.shipping_address)?;
    let discount_code = req.discount_code.as_deref().and_then(DiscountCode::parse);

    let order = state
        .order_service
        .place_order(PlaceOrder::new(items, shipping_address, discount_code))
        .await?;

    Ok(format!(
        "Order created with total: {}",
        order.calculate_total()
    ))
}

/// GET /orders — list all orders as their transfer-shape snapshots.
#[tracing::instrument(skip(state))]
pub async fn list<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<OrderRecord>>, ApiError> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders.iter().map(|o| o.to_record()).collect()))
}

/// PUT /orders/:id — update status, shipping address, and/or discount code.
#[tracing::instrument(skip(state, req))]
pub async fn update<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<String, ApiError> {
    let mut cmd = UpdateOrder::new();

    if let Some(ref status) = req.status {
        cmd.status = Some(
            OrderStatus::parse(status)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown status: {status}")))?,
        );
    }
    if let Some(address) = req.shipping_address {
        cmd.shipping_address = Some(Address::new(address)?);
    }
    if let Some(ref code) = req.discount_code {
        cmd.discount_code = DiscountCode::parse(code);
    }

    let order = state
        .order_service
        .update_order(&OrderId::from_string(id), cmd)
        .await?;

    Ok(format!("Order updated. New status: {}", order.status()))
}

/// POST /orders/:id/complete — transition the order to Completed.
///
/// A rejected transition is surfaced as a 200 with the guard's message,
/// distinctly from the 404 not-found case.
#[tracing::instrument(skip(state))]
pub async fn complete<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let order_id = OrderId::from_string(id.clone());

    match state.order_service.complete_order(&order_id).await {
        Ok(_) => Ok(format!("Order with id {id} completed")),
        Err(DomainError::Validation(err)) => Ok(err.to_string()),
        Err(DomainError::NotFound(_)) => {
            Err(ApiError::NotFound("Order not found to complete".to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// DELETE /orders/:id — remove the order.
#[tracing::instrument(skip(state))]
pub async fn delete<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    match state
        .order_service
        .delete_order(&OrderId::from_string(id))
        .await
    {
        Ok(()) => Ok("Order deleted".to_string()),
        Err(DomainError::NotFound(_)) => {
            Err(ApiError::NotFound("Order not found to delete".to_string()))
        }
        Err(err) => Err(err.into()),
    }
}
