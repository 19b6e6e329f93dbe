use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use qoupl_api::config::ServerConfig;
use qoupl_api::router::build_app_router;
use qoupl_api::state::AppState;
use qoupl_api::storage::MemoryStorage;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
#[allow(dead_code)]
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_base_url: "http://localhost:9000".to_string(),
        storage_bucket: "qoupl-media".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and an in-memory storage backend.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
#[allow(dead_code)]
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(MemoryStorage::new()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a request with a JSON body to the app.
#[allow(dead_code)]
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

/// Send a PUT request with a JSON body.
#[allow(dead_code)]
pub async fn put_json(app: Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body).await
}

/// Send a PATCH request with a JSON body.
#[allow(dead_code)]
pub async fn patch_json(app: Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    send_json(app, "PATCH", uri, body).await
}

/// Send a DELETE request.
#[allow(dead_code)]
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
