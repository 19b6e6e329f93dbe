//! Route definitions for pages.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{pages, sections};
use crate::state::AppState;

/// Page routes mounted at `/pages`.
///
/// ```text
/// GET    /                        -> list_pages
/// POST   /                        -> create_page
/// GET    /{id}                    -> get_page
/// PATCH  /{id}                    -> update_page
/// DELETE /{id}                    -> delete_page
/// GET    /{id}/sections           -> list_page_sections
/// PUT    /{id}/sections/reorder   -> reorder_sections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages).post(pages::create_page))
        .route(
            "/{id}",
            get(pages::get_page)
                .patch(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/{id}/sections", get(sections::list_page_sections))
        .route(
            "/{id}/sections/reorder",
            put(sections::reorder_sections),
        )
}
