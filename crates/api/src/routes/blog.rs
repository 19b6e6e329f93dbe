//! Route definitions for blog posts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Blog routes mounted at `/blog`.
///
/// ```text
/// GET    /posts                  -> list_posts
/// POST   /posts                  -> create_post
/// GET    /posts/{id}             -> get_post
/// PATCH  /posts/{id}             -> update_post
/// DELETE /posts/{id}             -> delete_post
/// POST   /posts/{id}/publish     -> publish_post
/// POST   /posts/{id}/unpublish   -> unpublish_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(blog::list_posts).post(blog::create_post))
        .route(
            "/posts/{id}",
            get(blog::get_post)
                .patch(blog::update_post)
                .delete(blog::delete_post),
        )
        .route("/posts/{id}/publish", post(blog::publish_post))
        .route("/posts/{id}/unpublish", post(blog::unpublish_post))
}
