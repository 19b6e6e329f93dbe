//! Route definitions for FAQ entries.

use axum::routing::get;
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

/// FAQ routes mounted at `/faqs`.
///
/// ```text
/// GET    /        -> list_faqs
/// POST   /        -> create_faq
/// GET    /{id}    -> get_faq
/// PATCH  /{id}    -> update_faq
/// DELETE /{id}    -> delete_faq
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faqs::list_faqs).post(faqs::create_faq))
        .route(
            "/{id}",
            get(faqs::get_faq)
                .patch(faqs::update_faq)
                .delete(faqs::delete_faq),
        )
}
