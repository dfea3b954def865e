//! End-to-end tests of the HTTP contract, driven through the real router
//! against the embedded backend.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use postbox_server::db::{EmbeddedStore, FeedbackStore};
use postbox_server::http::{build_router, AppState};
use postbox_server::models::ListOrder;

async fn test_app() -> (Router, Arc<dyn FeedbackStore>) {
    let store: Arc<dyn FeedbackStore> =
        Arc::new(EmbeddedStore::open().await.expect("in-memory store"));
    let state = AppState::new(store.clone(), "test_secret_key");
    (build_router(state, false), store)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn valid_submission_redirects_to_thank_you() {
    let (app, store) = test_app().await;

    let response = app
        .oneshot(post_form("name=Alice&message=Great+class%21"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/thank-you");

    let records = store.list_all(ListOrder::OldestFirst).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("Alice"));
    assert_eq!(records[0].message, "Great class!");
    assert!(!records[0].is_read);
}

#[tokio::test]
async fn empty_message_rerenders_the_form() {
    let (app, store) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_form("name=Bob&message="))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("message cannot be empty"));

    // A form without the field at all takes the same path.
    let response = app.oneshot(post_form("name=Bob")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let records = store.list_all(ListOrder::OldestFirst).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn blank_names_are_stored_as_anonymous() {
    let (app, store) = test_app().await;

    app.clone()
        .oneshot(post_form("name=&message=Anonymous+note"))
        .await
        .unwrap();

    let records = store.list_all(ListOrder::OldestFirst).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, None);

    let response = app.oneshot(get("/feedback")).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("no name"));
}

#[tokio::test]
async fn feedback_page_lists_newest_first() {
    let (app, store) = test_app().await;
    store.insert(Some("Alice"), "first in").await.unwrap();
    store.insert(None, "last in").await.unwrap();

    let response = app.oneshot(get("/feedback")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let newest = body.find("last in").expect("newest entry rendered");
    let oldest = body.find("first in").expect("oldest entry rendered");
    assert!(newest < oldest, "newest entry should be rendered first");
}

#[tokio::test]
async fn mark_read_via_http_is_idempotent() {
    let (app, store) = test_app().await;
    let id = store.insert(Some("Alice"), "Great class!").await.unwrap();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(get(&format!("/feedback/read/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/feedback");
    }

    let records = store.list_all(ListOrder::OldestFirst).await.unwrap();
    assert!(records[0].is_read);
}

#[tokio::test]
async fn deleting_a_missing_id_touches_nothing() {
    let (app, store) = test_app().await;
    let id = store.insert(None, "keep me").await.unwrap();

    let response = app
        .oneshot(get(&format!("/feedback/delete/{}", id + 100)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);

    let records = store.list_all(ListOrder::OldestFirst).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "keep me");
}

#[tokio::test]
async fn delete_via_http_removes_the_record() {
    let (app, store) = test_app().await;
    let id = store.insert(None, "short-lived").await.unwrap();

    let response = app
        .oneshot(get(&format!("/feedback/delete/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);

    let records = store.list_all(ListOrder::OldestFirst).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn export_serves_csv_in_insertion_order() {
    let (app, store) = test_app().await;
    let first = store.insert(Some("Alice"), "Nice!").await.unwrap();
    let second = store.insert(None, "Thanks!").await.unwrap();
    store.mark_read(second).await.unwrap();

    let response = app.oneshot(get("/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .starts_with("attachment"));

    let body = body_string(response).await;
    let lines: Vec<&str> = body.split("\r\n").collect();
    assert_eq!(lines[0], "ID,Name,Message,Is Read");
    assert_eq!(lines[1], format!("{first},Alice,Nice!,false"));
    assert_eq!(lines[2], format!("{second},,Thanks!,true"));
}

#[tokio::test]
async fn thank_you_page_renders() {
    let (app, _) = test_app().await;

    let response = app.oneshot(get("/thank-you")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Thank you for your feedback"));
}

#[tokio::test]
async fn health_reports_the_embedded_backend() {
    let (app, _) = test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "embedded");
}
