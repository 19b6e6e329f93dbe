//! Handlers for page CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use qoupl_core::error::CoreError;
use qoupl_core::history::{ChangeAction, EntityKind};
use qoupl_core::types::DbId;
use qoupl_db::models::page::{CreatePage, UpdatePage};
use qoupl_db::repositories::PageRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::record_history;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /pages
pub async fn list_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// GET /pages/{id}
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let page = PageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "page", id }))?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /pages
pub async fn create_page(
    State(state): State<AppState>,
    Json(dto): Json<CreatePage>,
) -> AppResult<impl IntoResponse> {
    let page = PageRepo::create(&state.pool, &dto).await?;
    record_history(&state.pool, EntityKind::Page, page.id, ChangeAction::Created).await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
}

/// PATCH /pages/{id}
///
/// Flipping `is_published` is recorded as a publish/unpublish event;
/// everything else as a plain update.
pub async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<UpdatePage>,
) -> AppResult<impl IntoResponse> {
    let before = PageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "page", id }))?;

    let page = PageRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "page", id }))?;

    let action = match (before.is_published, page.is_published) {
        (false, true) => ChangeAction::Published,
        (true, false) => ChangeAction::Unpublished,
        _ => ChangeAction::Updated,
    };
    record_history(&state.pool, EntityKind::Page, id, action).await;

    Ok(Json(DataResponse { data: page }))
}

/// DELETE /pages/{id}
pub async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "page", id }));
    }
    record_history(&state.pool, EntityKind::Page, id, ChangeAction::Deleted).await;
    Ok(StatusCode::NO_CONTENT)
}
