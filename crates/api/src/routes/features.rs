//! Route definitions for feature highlights.

use axum::routing::get;
use axum::Router;

use crate::handlers::features;
use crate::state::AppState;

/// Feature routes mounted at `/features`.
///
/// ```text
/// GET    /        -> list_features
/// POST   /        -> create_feature
/// GET    /{id}    -> get_feature
/// PATCH  /{id}    -> update_feature
/// DELETE /{id}    -> delete_feature
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(features::list_features).post(features::create_feature))
        .route(
            "/{id}",
            get(features::get_feature)
                .patch(features::update_feature)
                .delete(features::delete_feature),
        )
}
