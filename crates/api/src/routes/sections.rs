//! Route definitions for page sections.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::sections;
use crate::state::AppState;

/// Section routes mounted at `/sections`.
///
/// ```text
/// POST   /                 -> create_section
/// GET    /{id}             -> get_section
/// PATCH  /{id}             -> update_section
/// DELETE /{id}             -> delete_section
/// PUT    /{id}/content     -> save_section_content
/// GET    /{id}/form        -> render_section_form
/// POST   /{id}/array       -> section_array_op
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sections::create_section))
        .route(
            "/{id}",
            get(sections::get_section)
                .patch(sections::update_section)
                .delete(sections::delete_section),
        )
        .route("/{id}/content", put(sections::save_section_content))
        .route("/{id}/form", get(sections::render_section_form))
        .route("/{id}/array", post(sections::section_array_op))
}
