//! Route handlers organized by resource.

pub mod export;
pub mod feedback;
pub mod health;
pub mod submit;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

/// Plain 302 redirect. Axum's `Redirect` constructors start at 303; the
/// redirects here are classic Found responses.
pub(crate) fn found(location: &'static str) -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, location)])
}
