use serde::{Deserialize, Serialize};

/// Persisted line item, raw primitive fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub product_id: String,
    pub quantity: f64,
    pub price: f64,
}

/// Persisted shape of an order, one record per order.
///
/// This is the transfer shape used both for storage and for HTTP responses.
/// `total` is an adapter-level denormalization kept for convenience; the
/// aggregate recomputes the authoritative total on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub items: Vec<OrderItemRecord>,
    pub shipping_address: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}
