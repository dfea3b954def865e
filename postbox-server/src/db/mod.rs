//! Persistence layer: one trait, two backends.
//!
//! [`EmbeddedStore`] runs against a transient in-memory SQLite database and
//! exists for tests and CI; [`NetworkedStore`] talks to Postgres. Positional
//! placeholder syntax differs between the two (`?1` vs `$1`) and stays
//! internal to each backend; callers only ever see [`FeedbackStore`].
//!
//! Connection lifecycle: every operation checks a connection out of the
//! backend's pool for exactly the duration of the call, and the checkout is
//! returned on every exit path by drop semantics. Mutations run inside a
//! transaction; dropping an uncommitted transaction rolls it back.

pub mod embedded;
pub mod networked;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{AppConfig, BackendConfig};
use crate::models::{FeedbackRecord, ListOrder};

pub use embedded::EmbeddedStore;
pub use networked::NetworkedStore;

/// Store errors, split by when they can occur.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend unreachable or credentials rejected at connection time.
    #[error("backend connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// An operation failed at the storage layer. Any open transaction has
    /// been rolled back.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// CRUD operations over the feedback table, backend-agnostic at the call
/// site.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Which backend this store runs on, for the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// Insert a record with `is_read = false`, returning the assigned id.
    ///
    /// Runs in a transaction: on failure nothing is created. Assumes the
    /// message was validated non-empty at the boundary.
    async fn insert(&self, name: Option<&str>, message: &str) -> Result<i64, StoreError>;

    /// Every record, ordered by id.
    async fn list_all(&self, order: ListOrder) -> Result<Vec<FeedbackRecord>, StoreError>;

    /// Set `is_read = true`. Returns whether a row was affected; a missing
    /// id is a no-op, not an error.
    async fn mark_read(&self, id: i64) -> Result<bool, StoreError>;

    /// Remove a record. Same no-op policy for missing ids as mark_read.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// All records oldest-first, for the CSV export.
    async fn export_all(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        self.list_all(ListOrder::OldestFirst).await
    }
}

/// Open the backend selected by the configuration and ensure the feedback
/// schema exists before returning.
pub async fn connect(config: &AppConfig) -> Result<Arc<dyn FeedbackStore>, StoreError> {
    match &config.backend {
        BackendConfig::Embedded => Ok(Arc::new(EmbeddedStore::open().await?)),
        BackendConfig::Networked(pg) => Ok(Arc::new(NetworkedStore::connect(pg).await?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_selects_the_embedded_backend() {
        let store = connect(&AppConfig::embedded()).await.unwrap();
        assert_eq!(store.backend_name(), "embedded");
    }
}
