//! Route definitions for site-wide content documents.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content routes mounted at `/content`.
///
/// ```text
/// GET  /               -> list_content
/// GET  /{key}          -> get_content
/// PUT  /{key}          -> save_content
/// GET  /{key}/form     -> render_content_form
/// POST /{key}/array    -> content_array_op
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list_content))
        .route(
            "/{key}",
            get(content::get_content).put(content::save_content),
        )
        .route("/{key}/form", get(content::render_content_form))
        .route("/{key}/array", post(content::content_array_op))
}
