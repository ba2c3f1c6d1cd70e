//! Persistence layer for the order service.
//!
//! Defines the [`OrderStore`] capability trait consumed by the domain layer,
//! the persisted [`OrderRecord`] shape, and two adapters: an in-memory store
//! for tests and local runs, and a PostgreSQL store backed by sqlx.

mod error;
mod memory;
mod postgres;
mod record;
mod store;

pub use error::{Result, StoreError};
pub use memory::InMemoryOrderStore;
pub use postgres::PostgresOrderStore;
pub use record::{OrderItemRecord, OrderRecord};
pub use store::OrderStore;
