//! Integration tests for waitlist signups, media uploads, and the
//! dashboard summary.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Waitlist
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn waitlist_signup_succeeds_and_is_listed(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/waitlist",
        &json!({ "name": "Ada", "email": "ada@example.com", "age": 29 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "ada@example.com");

    let listed = get(app.clone(), "/api/v1/waitlist").await;
    let json = body_json(listed).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let counted = get(app, "/api/v1/waitlist/count").await;
    assert_eq!(counted.status(), StatusCode::OK);
    let json = body_json(counted).await;
    assert_eq!(json["data"]["count"], 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_waitlist_email_returns_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "name": "Ada", "email": "ada@example.com" });
    let first = post_json(app.clone(), "/api/v1/waitlist", &body).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/api/v1/waitlist", &body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../migrations")]
async fn waitlist_rejects_blank_or_invalid_input(pool: PgPool) {
    let app = common::build_test_app(pool);

    let bad_email = post_json(
        app.clone(),
        "/api/v1/waitlist",
        &json!({ "name": "Ada", "email": "not-an-email" }),
    )
    .await;
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);

    let blank_name = post_json(
        app,
        "/api/v1/waitlist",
        &json!({ "name": "  ", "email": "ada@example.com" }),
    )
    .await;
    assert_eq!(blank_name.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Media uploads
// ---------------------------------------------------------------------------

fn multipart_request(uri: &str, file_name: &str, bytes: &str) -> Request<Body> {
    let boundary = "qoupl-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         content-disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         content-type: image/png\r\n\r\n\
         {bytes}\r\n\
         --{boundary}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[sqlx::test(migrations = "../../migrations")]
async fn media_upload_stores_object_and_metadata(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = app
        .clone()
        .oneshot(multipart_request("/api/v1/media", "logo.png", "PNGDATA"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["file_name"], "logo.png");
    assert_eq!(json["data"]["content_type"], "image/png");
    assert_eq!(json["data"]["size_bytes"], 7);
    assert!(json["data"]["public_url"]
        .as_str()
        .unwrap()
        .starts_with("memory://"));

    let listed = get(app, "/api/v1/media").await;
    let json = body_json(listed).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn media_upload_without_file_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let boundary = "qoupl-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         content-disposition: form-data; name=\"note\"\r\n\r\n\
         hello\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/media")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn dashboard_summary_counts_entities(pool: PgPool) {
    let app = common::build_test_app(pool);

    let page = post_json(
        app.clone(),
        "/api/v1/pages",
        &json!({ "slug": "home", "title": "Home" }),
    )
    .await;
    let page_id = body_json(page).await["data"]["id"].as_i64().unwrap();

    post_json(
        app.clone(),
        "/api/v1/sections",
        &json!({ "page_id": page_id, "section_type": "hero" }),
    )
    .await;
    post_json(
        app.clone(),
        "/api/v1/faqs",
        &json!({ "question": "Q?", "answer": "A." }),
    )
    .await;

    let response = get(app, "/api/v1/dashboard/summary").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["pages"], 1);
    assert_eq!(json["data"]["sections"], 1);
    assert_eq!(json["data"]["faqs"], 1);
    assert_eq!(json["data"]["blog_posts"], 0);
    assert_eq!(json["data"]["features"], 0);
    assert_eq!(json["data"]["pricing_plans"], 0);
}
