//! Integration tests for content entity CRUD.
//!
//! Exercises the repository layer against a real database:
//! - Page/section hierarchy and cascade delete
//! - Section ordering (append and bulk reorder)
//! - Unique constraint violations
//! - Partial updates and list operations
//! - Blog publish lifecycle

use serde_json::json;
use sqlx::PgPool;

use qoupl_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use qoupl_db::models::faq::{CreateFaq, UpdateFaq};
use qoupl_db::models::page::{CreatePage, UpdatePage};
use qoupl_db::models::pricing_plan::CreatePricingPlan;
use qoupl_db::models::section::{CreateSection, UpdateSection};
use qoupl_db::repositories::{BlogPostRepo, FaqRepo, PageRepo, PricingPlanRepo, SectionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_page(slug: &str) -> CreatePage {
    CreatePage {
        slug: slug.to_string(),
        title: format!("Page {slug}"),
        description: None,
    }
}

fn new_section(page_id: i64, section_type: &str) -> CreateSection {
    CreateSection {
        page_id,
        section_type: section_type.to_string(),
        sort_order: None,
        content: None,
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_and_find_page(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("home")).await.unwrap();
    assert_eq!(page.slug, "home");
    assert!(!page.is_published);

    let by_id = PageRepo::find_by_id(&pool, page.id).await.unwrap().unwrap();
    assert_eq!(by_id.id, page.id);

    let by_slug = PageRepo::find_by_slug(&pool, "home").await.unwrap().unwrap();
    assert_eq!(by_slug.id, page.id);
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_page_slug_is_rejected(pool: PgPool) {
    PageRepo::create(&pool, &new_page("pricing")).await.unwrap();
    let err = PageRepo::create(&pool, &new_page("pricing")).await.unwrap_err();
    let db_err = err.as_database_error().expect("expected database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn partial_page_update_leaves_other_fields(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("about")).await.unwrap();
    let updated = PageRepo::update(
        &pool,
        page.id,
        &UpdatePage {
            is_published: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.is_published);
    assert_eq!(updated.slug, "about");
    assert_eq!(updated.title, page.title);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_missing_page_returns_none(pool: PgPool) {
    let result = PageRepo::update(&pool, 9999, &UpdatePage::default()).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn sections_append_in_order(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("home")).await.unwrap();
    let hero = SectionRepo::create(&pool, &new_section(page.id, "hero"), &json!({}))
        .await
        .unwrap();
    let cta = SectionRepo::create(&pool, &new_section(page.id, "cta"), &json!({}))
        .await
        .unwrap();

    assert_eq!(hero.sort_order, 0);
    assert_eq!(cta.sort_order, 1);

    let listed = SectionRepo::list_for_page(&pool, page.id).await.unwrap();
    assert_eq!(
        listed.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![hero.id, cta.id]
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn reorder_rewrites_sort_order(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("home")).await.unwrap();
    let a = SectionRepo::create(&pool, &new_section(page.id, "hero"), &json!({}))
        .await
        .unwrap();
    let b = SectionRepo::create(&pool, &new_section(page.id, "faq-list"), &json!({}))
        .await
        .unwrap();
    let c = SectionRepo::create(&pool, &new_section(page.id, "cta"), &json!({}))
        .await
        .unwrap();

    SectionRepo::reorder(&pool, page.id, &[c.id, a.id, b.id]).await.unwrap();

    let listed = SectionRepo::list_for_page(&pool, page.id).await.unwrap();
    assert_eq!(
        listed.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![c.id, a.id, b.id]
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_page_cascades_to_sections(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("home")).await.unwrap();
    let section = SectionRepo::create(&pool, &new_section(page.id, "hero"), &json!({}))
        .await
        .unwrap();

    assert!(PageRepo::delete(&pool, page.id).await.unwrap());
    assert!(SectionRepo::find_by_id(&pool, section.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn section_content_update_replaces_document(pool: PgPool) {
    let page = PageRepo::create(&pool, &new_page("home")).await.unwrap();
    let section = SectionRepo::create(
        &pool,
        &new_section(page.id, "hero"),
        &json!({ "heading": "Old" }),
    )
    .await
    .unwrap();

    let updated = SectionRepo::set_content(&pool, section.id, &json!({ "heading": "New" }))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.content, json!({ "heading": "New" }));

    let hidden = SectionRepo::update(
        &pool,
        section.id,
        &UpdateSection {
            is_visible: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(!hidden.is_visible);
    assert_eq!(hidden.content, json!({ "heading": "New" }));
}

// ---------------------------------------------------------------------------
// Blog posts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn publish_stamps_published_at_once(pool: PgPool) {
    let post = BlogPostRepo::create(
        &pool,
        &CreateBlogPost {
            slug: "launch".to_string(),
            title: "We are live".to_string(),
            excerpt: None,
            body: Some("Hello".to_string()),
            cover_image: None,
        },
    )
    .await
    .unwrap();
    assert!(!post.is_published);
    assert!(post.published_at.is_none());

    let published = BlogPostRepo::publish(&pool, post.id).await.unwrap().unwrap();
    let first_stamp = published.published_at.unwrap();

    let unpublished = BlogPostRepo::unpublish(&pool, post.id).await.unwrap().unwrap();
    assert!(!unpublished.is_published);
    assert_eq!(unpublished.published_at, Some(first_stamp));

    // Republishing keeps the original timestamp.
    let republished = BlogPostRepo::publish(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(republished.published_at, Some(first_stamp));
}

#[sqlx::test(migrations = "../../migrations")]
async fn published_only_listing_filters_drafts(pool: PgPool) {
    let draft = BlogPostRepo::create(
        &pool,
        &CreateBlogPost {
            slug: "draft".to_string(),
            title: "Draft".to_string(),
            excerpt: None,
            body: None,
            cover_image: None,
        },
    )
    .await
    .unwrap();
    let live = BlogPostRepo::create(
        &pool,
        &CreateBlogPost {
            slug: "live".to_string(),
            title: "Live".to_string(),
            excerpt: None,
            body: None,
            cover_image: None,
        },
    )
    .await
    .unwrap();
    BlogPostRepo::publish(&pool, live.id).await.unwrap();

    let public = BlogPostRepo::list(&pool, true).await.unwrap();
    assert_eq!(public.iter().map(|p| p.id).collect::<Vec<_>>(), vec![live.id]);

    let admin = BlogPostRepo::list(&pool, false).await.unwrap();
    assert_eq!(admin.len(), 2);
    assert!(admin.iter().any(|p| p.id == draft.id));
}

#[sqlx::test(migrations = "../../migrations")]
async fn blog_update_patches_body(pool: PgPool) {
    let post = BlogPostRepo::create(
        &pool,
        &CreateBlogPost {
            slug: "notes".to_string(),
            title: "Notes".to_string(),
            excerpt: Some("short".to_string()),
            body: None,
            cover_image: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(post.body, "");

    let updated = BlogPostRepo::update(
        &pool,
        post.id,
        &UpdateBlogPost {
            body: Some("Longer text".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.body, "Longer text");
    assert_eq!(updated.excerpt.as_deref(), Some("short"));
}

// ---------------------------------------------------------------------------
// FAQs and pricing plans
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn faq_list_filters_by_category(pool: PgPool) {
    let general = FaqRepo::create(
        &pool,
        &CreateFaq {
            question: "What is qoupl?".to_string(),
            answer: "A dating app.".to_string(),
            category: None,
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(general.category, "general");

    FaqRepo::create(
        &pool,
        &CreateFaq {
            question: "How much does it cost?".to_string(),
            answer: "See pricing.".to_string(),
            category: Some("pricing".to_string()),
            sort_order: None,
        },
    )
    .await
    .unwrap();

    let pricing = FaqRepo::list(&pool, Some("pricing")).await.unwrap();
    assert_eq!(pricing.len(), 1);
    assert_eq!(pricing[0].category, "pricing");

    let all = FaqRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);

    let hidden = FaqRepo::update(
        &pool,
        general.id,
        &UpdateFaq {
            is_visible: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(!hidden.is_visible);
}

#[sqlx::test(migrations = "../../migrations")]
async fn pricing_plan_defaults_apply(pool: PgPool) {
    let plan = PricingPlanRepo::create(
        &pool,
        &CreatePricingPlan {
            name: "Free".to_string(),
            tagline: None,
            price_cents: 0,
            billing_period: None,
            perks: None,
            is_highlighted: None,
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(plan.billing_period, "monthly");
    assert_eq!(plan.perks, json!([]));
    assert!(!plan.is_highlighted);
    assert_eq!(plan.sort_order, 0);

    assert!(PricingPlanRepo::delete(&pool, plan.id).await.unwrap());
    assert!(!PricingPlanRepo::delete(&pool, plan.id).await.unwrap());
}
