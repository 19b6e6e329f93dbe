//! Handlers for blog posts.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use qoupl_core::error::CoreError;
use qoupl_core::history::{ChangeAction, EntityKind};
use qoupl_core::types::DbId;
use qoupl_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use qoupl_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::record_history;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /blog/posts`.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    /// Restrict the listing to published posts (the public view).
    pub published: Option<bool>,
}

/// GET /blog/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsQuery>,
) -> AppResult<impl IntoResponse> {
    let posts = BlogPostRepo::list(&state.pool, params.published.unwrap_or(false)).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /blog/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "blog post",
            id,
        }))?;
    Ok(Json(DataResponse { data: post }))
}

/// POST /blog/posts
pub async fn create_post(
    State(state): State<AppState>,
    Json(dto): Json<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::create(&state.pool, &dto).await?;
    record_history(
        &state.pool,
        EntityKind::BlogPost,
        post.id,
        ChangeAction::Created,
    )
    .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PATCH /blog/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<UpdateBlogPost>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "blog post",
            id,
        }))?;
    record_history(&state.pool, EntityKind::BlogPost, id, ChangeAction::Updated).await;
    Ok(Json(DataResponse { data: post }))
}

/// POST /blog/posts/{id}/publish
pub async fn publish_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::publish(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "blog post",
            id,
        }))?;
    record_history(
        &state.pool,
        EntityKind::BlogPost,
        id,
        ChangeAction::Published,
    )
    .await;
    Ok(Json(DataResponse { data: post }))
}

/// POST /blog/posts/{id}/unpublish
pub async fn unpublish_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::unpublish(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "blog post",
            id,
        }))?;
    record_history(
        &state.pool,
        EntityKind::BlogPost,
        id,
        ChangeAction::Unpublished,
    )
    .await;
    Ok(Json(DataResponse { data: post }))
}

/// DELETE /blog/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BlogPostRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "blog post",
            id,
        }));
    }
    record_history(&state.pool, EntityKind::BlogPost, id, ChangeAction::Deleted).await;
    Ok(StatusCode::NO_CONTENT)
}
