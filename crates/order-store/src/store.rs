use async_trait::async_trait;
use common::OrderId;

use crate::{OrderRecord, Result};

/// Core trait for order persistence adapters.
///
/// Every call is a single-aggregate operation; no transactional or
/// multi-aggregate capability is required. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Retrieves all stored order records.
    async fn find_all(&self) -> Result<Vec<OrderRecord>>;

    /// Retrieves a record by identity.
    ///
    /// Returns None for a legitimate absence; absence is not an error.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<OrderRecord>>;

    /// Upserts a record by identity: inserts if absent, replaces if present.
    ///
    /// Last write wins; there is no optimistic-concurrency token.
    async fn save(&self, record: OrderRecord) -> Result<()>;

    /// Removes a record by identity.
    ///
    /// Returns true if a record was removed, false if the id was absent.
    async fn delete(&self, id: &OrderId) -> Result<bool>;
}
