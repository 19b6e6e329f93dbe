pub mod blog;
pub mod content;
pub mod dashboard;
pub mod faqs;
pub mod features;
pub mod health;
pub mod history;
pub mod media;
pub mod pages;
pub mod pricing;
pub mod sections;
pub mod waitlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content                               list stored documents
/// /content/{key}                         get resolved document, save (PUT)
/// /content/{key}/form                    rendered editor form
/// /content/{key}/array                   array push/remove/move (POST)
///
/// /pages                                 list, create
/// /pages/{id}                            get, update, delete
/// /pages/{id}/sections                   list page sections
/// /pages/{id}/sections/reorder           bulk reorder (PUT)
///
/// /sections                              create
/// /sections/{id}                         get, update, delete
/// /sections/{id}/content                 replace content document (PUT)
/// /sections/{id}/form                    rendered editor form
/// /sections/{id}/array                   array push/remove/move (POST)
///
/// /blog/posts                            list, create
/// /blog/posts/{id}                       get, update, delete
/// /blog/posts/{id}/publish               publish (POST)
/// /blog/posts/{id}/unpublish             unpublish (POST)
///
/// /faqs                                  list, create
/// /faqs/{id}                             get, update, delete
///
/// /features                              list, create
/// /features/{id}                         get, update, delete
///
/// /pricing-plans                         list, create
/// /pricing-plans/{id}                    get, update, delete
///
/// /media                                 list, upload (multipart POST)
/// /media/{id}                            get, delete
///
/// /waitlist                              signup (public POST), list
/// /waitlist/count                        total signup count
///
/// /history                               recent change events with summaries
///
/// /dashboard/summary                     entity counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/content", content::router())
        .nest("/pages", pages::router())
        .nest("/sections", sections::router())
        .nest("/blog", blog::router())
        .nest("/faqs", faqs::router())
        .nest("/features", features::router())
        .nest("/pricing-plans", pricing::router())
        .nest("/media", media::router())
        .nest("/waitlist", waitlist::router())
        .nest("/history", history::router())
        .nest("/dashboard", dashboard::router())
}
