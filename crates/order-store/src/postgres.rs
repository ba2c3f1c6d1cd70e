use async_trait::async_trait;
use common::OrderId;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{OrderItemRecord, OrderRecord, OrderStore, Result, StoreError};

/// PostgreSQL-backed order store.
///
/// Holds an explicit connection pool handle passed in at construction;
/// there is no process-wide client singleton.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store from an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database and runs pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        let store = Self::new(pool);
        store.run_migrations().await?;
        Ok(store)
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_record(row: PgRow) -> Result<OrderRecord> {
        let items_json: serde_json::Value = row.try_get("items")?;
        let items: Vec<OrderItemRecord> = serde_json::from_value(items_json)?;

        Ok(OrderRecord {
            id: row.try_get("id")?,
            items,
            shipping_address: row.try_get("shipping_address")?,
            status: row.try_get("status")?,
            discount_code: row.try_get("discount_code")?,
            total: row.try_get("total")?,
        })
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn find_all(&self) -> Result<Vec<OrderRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, items, shipping_address, status, discount_code, total
            FROM orders
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_record).collect()
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<OrderRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, items, shipping_address, status, discount_code, total
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_record).transpose()
    }

    async fn save(&self, record: OrderRecord) -> Result<()> {
        let items_json = serde_json::to_value(&record.items)?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, items, shipping_address, status, discount_code, total)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                items = EXCLUDED.items,
                shipping_address = EXCLUDED.shipping_address,
                status = EXCLUDED.status,
                discount_code = EXCLUDED.discount_code,
                total = EXCLUDED.total
            "#,
        )
        .bind(&record.id)
        .bind(items_json)
        .bind(&record.shipping_address)
        .bind(&record.status)
        .bind(&record.discount_code)
        .bind(record.total)
        .execute(&self.pool)
        .await
        .map_err(StoreError::Database)?;

        Ok(())
    }

    async fn delete(&self, id: &OrderId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
