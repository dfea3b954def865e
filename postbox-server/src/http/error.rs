//! HTTP error mapping for handlers that can fail.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::StoreError;
use crate::http::views;

/// Errors surfaced by request handlers.
///
/// Mutating handlers catch storage failures themselves (flash + redirect);
/// this type covers the read-only routes, which turn a store failure into a
/// logged 500 page. The actual error stays server-side.
#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store(err) => {
                tracing::error!(error = %err, "store failure while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page())).into_response()
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
