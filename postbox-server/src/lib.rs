//! postbox-server: feedback collection over HTTP
//!
//! Visitors drop a message (optionally signed with a name); reviewers list
//! entries, mark them read, delete them, and export everything as CSV.
//! Storage is a single feedback table behind [`db::FeedbackStore`], with an
//! embedded in-memory backend for tests and a networked Postgres backend
//! for production.

pub mod config;
pub mod db;
pub mod export;
pub mod http;
pub mod models;

pub use config::{AppConfig, BackendConfig};
pub use db::{connect, FeedbackStore, StoreError};
pub use models::FeedbackRecord;
