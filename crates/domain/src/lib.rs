//! Domain layer for the order service.
//!
//! This crate provides the core domain model:
//! - Self-validating value objects (PositiveNumber, Address, DiscountCode)
//! - The Order aggregate with its status state machine
//! - OrderService wrapping a persistence adapter behind named operations

pub mod error;
pub mod order;

pub use common::OrderId;
pub use error::{DomainError, ValidationError};
pub use order::{
    Address, DiscountCode, Order, OrderItem, OrderService, OrderStatus, PlaceOrder, PositiveNumber,
    UpdateOrder,
};
