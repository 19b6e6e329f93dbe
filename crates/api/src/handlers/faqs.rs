//! Handlers for FAQ entries.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use qoupl_core::error::CoreError;
use qoupl_core::history::{ChangeAction, EntityKind};
use qoupl_core::types::DbId;
use qoupl_db::models::faq::{CreateFaq, UpdateFaq};
use qoupl_db::repositories::FaqRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::record_history;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /faqs`.
#[derive(Debug, Deserialize)]
pub struct ListFaqsQuery {
    pub category: Option<String>,
}

/// GET /faqs
pub async fn list_faqs(
    State(state): State<AppState>,
    Query(params): Query<ListFaqsQuery>,
) -> AppResult<impl IntoResponse> {
    let faqs = FaqRepo::list(&state.pool, params.category.as_deref()).await?;
    Ok(Json(DataResponse { data: faqs }))
}

/// GET /faqs/{id}
pub async fn get_faq(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "faq", id }))?;
    Ok(Json(DataResponse { data: faq }))
}

/// POST /faqs
pub async fn create_faq(
    State(state): State<AppState>,
    Json(dto): Json<CreateFaq>,
) -> AppResult<impl IntoResponse> {
    let faq = FaqRepo::create(&state.pool, &dto).await?;
    record_history(&state.pool, EntityKind::Faq, faq.id, ChangeAction::Created).await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: faq })))
}

/// PATCH /faqs/{id}
pub async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<UpdateFaq>,
) -> AppResult<impl IntoResponse> {
    let faq = FaqRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "faq", id }))?;
    record_history(&state.pool, EntityKind::Faq, id, ChangeAction::Updated).await;
    Ok(Json(DataResponse { data: faq }))
}

/// DELETE /faqs/{id}
pub async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FaqRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "faq", id }));
    }
    record_history(&state.pool, EntityKind::Faq, id, ChangeAction::Deleted).await;
    Ok(StatusCode::NO_CONTENT)
}
