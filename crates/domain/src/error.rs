//! Domain error types.

use order_store::StoreError;
use thiserror::Error;

use crate::order::OrderStatus;

/// A domain-rule violation raised synchronously at the point of violation.
///
/// The message of each variant is the human-readable text surfaced verbatim
/// to clients by the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric value was negative (or not a number).
    #[error("Value must be positive")]
    NegativeValue,

    /// An address was empty or whitespace-only.
    #[error("Empty address is not allowed")]
    EmptyAddress,

    /// An order was created without any line items.
    #[error("The order must have at least one item")]
    NoItems,

    /// A completion was attempted on an order that is not in Created status.
    #[error("Cannot complete an order with status: {0}")]
    InvalidStatusTransition(OrderStatus),

    /// A stored status string did not match any known status.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A domain-rule violation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error occurred in the order store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// No order exists with the given identity.
    #[error("Order not found: {0}")]
    NotFound(String),
}
