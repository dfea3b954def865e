//! Embedded SQLite backend: transient, in-memory, test-oriented.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use super::{FeedbackStore, StoreError};
use crate::models::{FeedbackRecord, ListOrder};

/// Feedback schema for SQLite. AUTOINCREMENT keeps ids monotonic, so a
/// deleted id is never handed out again.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS feedback (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    message TEXT NOT NULL,
    is_read BOOLEAN NOT NULL DEFAULT 0
)
"#;

/// In-memory SQLite store.
pub struct EmbeddedStore {
    pool: SqlitePool,
}

impl EmbeddedStore {
    /// Open a fresh, empty in-memory database with the schema applied.
    ///
    /// The pool is pinned to a single connection that is never reaped:
    /// every sqlx SQLite connection to `:memory:` opens its own private
    /// database, so recycling the connection would drop all data.
    pub async fn open() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(StoreError::Connection)?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl FeedbackStore for EmbeddedStore {
    fn backend_name(&self) -> &'static str {
        "embedded"
    }

    async fn insert(&self, name: Option<&str>, message: &str) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO feedback (name, message, is_read) VALUES (?1, ?2, 0)")
            .bind(name)
            .bind(message)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.last_insert_rowid())
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
        let result = sqlx::query("UPDATE feedback SET is_read = 1 WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
