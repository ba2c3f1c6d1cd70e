//! Order aggregate and related types.

mod aggregate;
mod commands;
mod service;
mod status;
mod value_objects;

pub use aggregate::Order;
pub use commands::{PlaceOrder, UpdateOrder};
pub use service::OrderService;
pub use status::OrderStatus;
pub use value_objects::{Address, DiscountCode, OrderItem, PositiveNumber};
