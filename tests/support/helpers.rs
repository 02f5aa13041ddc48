// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use poemsland_core::application::ports::cache::SlugIndexCache;
use poemsland_core::application::services::ApplicationServices;
use poemsland_core::domain::poem::{PoemReadRepository, PoemRecord};
use poemsland_core::infrastructure::cache::DisabledSlugIndexCache;
use poemsland_core::infrastructure::repositories::InMemoryPoemRepository;
use poemsland_core::presentation::http::{routes::build_router, state::HttpState};

pub const TEST_PAGE_SIZE: u32 = 2;

pub fn build_services(repo: Arc<dyn PoemReadRepository>) -> Arc<ApplicationServices> {
    let cache: Arc<dyn SlugIndexCache> = Arc::new(DisabledSlugIndexCache);
    Arc::new(ApplicationServices::new(repo, cache, TEST_PAGE_SIZE))
}

pub fn make_router_with_repo(repo: Arc<dyn PoemReadRepository>) -> axum::Router {
    let state = HttpState {
        services: build_services(repo),
    };
    build_router(state, &[])
}

pub fn make_test_router(records: Vec<PoemRecord>) -> axum::Router {
    make_router_with_repo(Arc::new(InMemoryPoemRepository::new(records)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}

pub fn slugs_of(page: &Value) -> Vec<String> {
    page["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["slug"].as_str().unwrap_or_default().to_string())
        .collect()
}
