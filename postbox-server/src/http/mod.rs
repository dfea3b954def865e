//! HTTP layer: router, handlers, views, and error mapping.

pub mod error;
pub mod flash;
pub mod routes;
pub mod server;
pub mod views;

pub use error::AppError;
pub use server::{build_router, run_server, AppState, ServerConfig};
