//! Reviewer views: list, mark read, delete.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use super::found;
use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::http::views;
use crate::models::ListOrder;

/// GET /feedback - every entry, newest first.
async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let records = state.store.list_all(ListOrder::NewestFirst).await?;
    Ok(Html(views::feedback_page(&records)))
}

/// GET /feedback/read/{id} - idempotent; unknown ids fall through.
async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.mark_read(id).await? {
        tracing::debug!(id, "mark-read on unknown id ignored");
    }
    Ok(found("/feedback"))
}

/// GET /feedback/delete/{id} - unknown ids fall through.
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete(id).await? {
        tracing::debug!(id, "delete on unknown id ignored");
    }
    Ok(found("/feedback"))
}

/// Reviewer routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedback", get(list))
        .route("/feedback/read/{id}", get(mark_read))
        .route("/feedback/delete/{id}", get(delete))
}
