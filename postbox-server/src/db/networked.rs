//! Networked Postgres backend.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use super::{FeedbackStore, StoreError};
use crate::config::PgConfig;
use crate::models::{FeedbackRecord, ListOrder};

/// Kept low; a feedback box does not need a large pool.
const MAX_CONNECTIONS: u32 = 5;

/// Feedback schema for Postgres. BIGSERIAL draws ids from a sequence, so
/// they stay monotonic and deleted ids are never reused.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS feedback (
    id BIGSERIAL PRIMARY KEY,
    name TEXT,
    message TEXT NOT NULL,
    is_read BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

/// Postgres-backed store.
pub struct NetworkedStore {
    pool: PgPool,
}

impl NetworkedStore {
    /// Connect with the given credentials and ensure the feedback schema
    /// exists. Fails with [`StoreError::Connection`] when the server is
    /// unreachable or the credentials are rejected.
    pub async fn connect(config: &PgConfig) -> Result<Self, StoreError> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(StoreError::Connection)?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl FeedbackStore for NetworkedStore {
    fn backend_name(&self) -> &'static str {
        "networked"
    }

    async fn insert(&self, name: Option<&str>, message: &str) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO feedback (name, message, is_read) VALUES ($1, $2, FALSE) RETURNING id",
        )
        .bind(name)
        .bind(message)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    async fn list_all(&self, order: ListOrder) -> Result<Vec<FeedbackRecord>, StoreError> {
        let sql = match order {
            ListOrder::NewestFirst => {
                "SELECT id, name, message, is_read FROM feedback ORDER BY id DESC"
            }
            ListOrder::OldestFirst => {
                "SELECT id, name, message, is_read FROM feedback ORDER BY id ASC"
            }
        };

        let records = sqlx::query_as::<_, FeedbackRecord>(sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn mark_read(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE feedback SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
