// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use conduit_core::application::services::ApplicationServices;
use conduit_core::domain::article::ArticleReadRepository;
use conduit_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn build_test_state(read_repo: Arc<dyn ArticleReadRepository>) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(read_repo)),
    }
}

pub fn make_test_router(read_repo: Arc<dyn ArticleReadRepository>) -> axum::Router {
    build_router(
        build_test_state(read_repo),
        &["http://localhost:3000".to_string()],
    )
}

/// Send a GET through the router and decode the JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert an `{"errors":{"body":[...]}}` response with exactly the given messages.
pub fn assert_error_body(json: &Value, expected: &[&str]) {
    let messages: Vec<&str> = json["errors"]["body"]
        .as_array()
        .expect("errors.body must be an array")
        .iter()
        .map(|v| v.as_str().expect("error messages are strings"))
        .collect();
    assert_eq!(messages, expected);
    assert_eq!(
        json.as_object().map(|o| o.len()),
        Some(1),
        "error body must only contain `errors`"
    );
}
