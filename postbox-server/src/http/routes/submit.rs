//! Submission flow: form, POST handler, confirmation view.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;

use super::found;
use crate::http::flash;
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{normalize_name, MessageBody};

/// Form fields for POST /.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// GET / - submission form, consuming any pending flash message.
async fn index(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, message) = flash::take(jar);
    (jar, Html(views::index_page(message.as_deref())))
}

/// POST / - validate and store a submission.
///
/// An invalid message re-renders the form in place (200, nothing stored).
/// A storage failure rolls back, queues a flash message, and redirects back
/// to the form.
async fn submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<SubmitForm>,
) -> Response {
    let message = match MessageBody::new(form.message.as_deref().unwrap_or("")) {
        Ok(message) => message,
        Err(err) => {
            return Html(views::index_page(Some(&err.to_string()))).into_response();
        }
    };

    let name = normalize_name(form.name);

    match state.store.insert(name.as_deref(), message.as_str()).await {
        Ok(id) => {
            tracing::debug!(id, "feedback stored");
            found("/thank-you").into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to insert feedback");
            let jar = flash::set(jar, "Failed to submit feedback.");
            (jar, found("/")).into_response()
        }
    }
}

/// GET /thank-you - confirmation view.
async fn thank_you() -> Html<String> {
    Html(views::thank_you_page())
}

/// Submission routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/thank-you", get(thank_you))
}
