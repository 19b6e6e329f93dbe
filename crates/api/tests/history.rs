//! Integration tests for the change history view: event recording on
//! mutations and read-time summary reconstruction.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Recording and reconstruction
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn faq_lifecycle_appears_in_history_with_summaries(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = post_json(
        app.clone(),
        "/api/v1/faqs",
        &json!({ "question": "Is qoupl free?", "answer": "Yes, to start." }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let faq_id = body_json(created).await["data"]["id"].as_i64().unwrap();

    let updated = patch_json(
        app.clone(),
        &format!("/api/v1/faqs/{faq_id}"),
        &json!({ "answer": "Yes. Premium is optional." }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let response = get(app, "/api/v1/history").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    // Newest first: the update, then the create.
    assert_eq!(items[0]["action"], "updated");
    assert_eq!(items[1]["action"], "created");
    for item in items {
        assert_eq!(item["entity_type"], "faqs");
        assert_eq!(item["summary"]["kind"], "FAQ");
        assert_eq!(item["summary"]["title"], "Is qoupl free?");
        assert!(item["summary"]["parent"].is_null());
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleted_entity_degrades_to_null_summary(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = post_json(
        app.clone(),
        "/api/v1/faqs",
        &json!({ "question": "Will this stay?", "answer": "No." }),
    )
    .await;
    let faq_id = body_json(created).await["data"]["id"].as_i64().unwrap();

    let deleted = delete(app.clone(), &format!("/api/v1/faqs/{faq_id}")).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let response = get(app, "/api/v1/history").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    // The events survive the entity; their summaries are null.
    assert_eq!(items[0]["action"], "deleted");
    assert!(items[0]["summary"].is_null());
    assert_eq!(items[1]["action"], "created");
    assert!(items[1]["summary"].is_null());
}

#[sqlx::test(migrations = "../../migrations")]
async fn section_summary_names_owning_page(pool: PgPool) {
    let app = common::build_test_app(pool);

    let page = post_json(
        app.clone(),
        "/api/v1/pages",
        &json!({ "slug": "home", "title": "Home" }),
    )
    .await;
    let page_id = body_json(page).await["data"]["id"].as_i64().unwrap();

    let created = post_json(
        app.clone(),
        "/api/v1/sections",
        &json!({ "page_id": page_id, "section_type": "feature-grid", "content": {
            "heading": "Why qoupl",
            "items": [],
            "columns": 3
        }}),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = get(app, "/api/v1/history").await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();

    let section_event = items
        .iter()
        .find(|i| i["entity_type"] == "sections")
        .expect("section create should be logged");
    assert_eq!(section_event["summary"]["kind"], "Section");
    // No title/name key in the payload, so the heading is used.
    assert_eq!(section_event["summary"]["title"], "Why qoupl");
    assert_eq!(section_event["summary"]["parent"], "Home");
}

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_entity_type_in_log_does_not_fail_the_request(pool: PgPool) {
    // A row written by an older deployment with a since-removed type.
    sqlx::query(
        "INSERT INTO content_history (entity_type, entity_id, action) \
         VALUES ('testimonials', 7, 'created')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/history").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["entity_type"], "testimonials");
    assert!(items[0]["summary"].is_null());
}

#[sqlx::test(migrations = "../../migrations")]
async fn reordering_sections_logs_one_update_on_the_page(pool: PgPool) {
    let app = common::build_test_app(pool);

    let page = post_json(
        app.clone(),
        "/api/v1/pages",
        &json!({ "slug": "home", "title": "Home" }),
    )
    .await;
    let page_id = body_json(page).await["data"]["id"].as_i64().unwrap();

    let mut ids = Vec::new();
    for section_type in ["hero", "cta"] {
        let created = post_json(
            app.clone(),
            "/api/v1/sections",
            &json!({ "page_id": page_id, "section_type": section_type }),
        )
        .await;
        ids.push(body_json(created).await["data"]["id"].as_i64().unwrap());
    }

    let reordered = put_json(
        app.clone(),
        &format!("/api/v1/pages/{page_id}/sections/reorder"),
        &json!({ "section_ids": [ids[1], ids[0]] }),
    )
    .await;
    assert_eq!(reordered.status(), StatusCode::OK);

    let response = get(app, "/api/v1/history").await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();

    // Page create, two section creates, then the reorder as one page update.
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["entity_type"], "pages");
    assert_eq!(items[0]["entity_id"], page_id);
    assert_eq!(items[0]["action"], "updated");
    assert_eq!(items[0]["summary"]["kind"], "Page");
    assert_eq!(items[0]["summary"]["title"], "Home");
}

// ---------------------------------------------------------------------------
// Publish lifecycle events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn blog_publish_and_unpublish_are_distinct_actions(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = post_json(
        app.clone(),
        "/api/v1/blog/posts",
        &json!({ "slug": "hello", "title": "Hello world" }),
    )
    .await;
    let post_id = body_json(created).await["data"]["id"].as_i64().unwrap();

    let published = post_json(
        app.clone(),
        &format!("/api/v1/blog/posts/{post_id}/publish"),
        &json!({}),
    )
    .await;
    assert_eq!(published.status(), StatusCode::OK);

    let unpublished = post_json(
        app.clone(),
        &format!("/api/v1/blog/posts/{post_id}/unpublish"),
        &json!({}),
    )
    .await;
    assert_eq!(unpublished.status(), StatusCode::OK);

    let response = get(app, "/api/v1/history").await;
    let json = body_json(response).await;
    let actions: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["action"].as_str().unwrap())
        .collect();
    assert_eq!(actions, vec!["unpublished", "published", "created"]);

    let items = json["data"].as_array().unwrap();
    assert_eq!(items[0]["summary"]["kind"], "Blog post");
    assert_eq!(items[0]["summary"]["title"], "Hello world");
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn history_limit_is_applied(pool: PgPool) {
    let app = common::build_test_app(pool);

    for i in 0..5 {
        let response = post_json(
            app.clone(),
            "/api/v1/features",
            &json!({ "title": format!("Feature {i}") }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/v1/history?limit=3").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}
