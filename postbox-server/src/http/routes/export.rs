//! CSV download of every feedback record.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::export::to_csv;
use crate::http::error::AppError;
use crate::http::server::AppState;

/// GET /export - all records, oldest first, as an attachment.
async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = state.store.export_all().await?;
    let csv = to_csv(&records);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"feedback_export.csv\"",
            ),
        ],
        csv,
    ))
}

/// Export routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/export", get(export))
}
