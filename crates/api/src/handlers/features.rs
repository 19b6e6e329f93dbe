//! Handlers for feature highlights.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use qoupl_core::error::CoreError;
use qoupl_core::history::{ChangeAction, EntityKind};
use qoupl_core::types::DbId;
use qoupl_db::models::feature::{CreateFeature, UpdateFeature};
use qoupl_db::repositories::FeatureRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::record_history;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /features
pub async fn list_features(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let features = FeatureRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: features }))
}

/// GET /features/{id}
pub async fn get_feature(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let feature = FeatureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "feature",
            id,
        }))?;
    Ok(Json(DataResponse { data: feature }))
}

/// POST /features
pub async fn create_feature(
    State(state): State<AppState>,
    Json(dto): Json<CreateFeature>,
) -> AppResult<impl IntoResponse> {
    let feature = FeatureRepo::create(&state.pool, &dto).await?;
    record_history(
        &state.pool,
        EntityKind::Feature,
        feature.id,
        ChangeAction::Created,
    )
    .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: feature })))
}

/// PATCH /features/{id}
pub async fn update_feature(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<UpdateFeature>,
) -> AppResult<impl IntoResponse> {
    let feature = FeatureRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "feature",
            id,
        }))?;
    record_history(&state.pool, EntityKind::Feature, id, ChangeAction::Updated).await;
    Ok(Json(DataResponse { data: feature }))
}

/// DELETE /features/{id}
pub async fn delete_feature(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FeatureRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "feature",
            id,
        }));
    }
    record_history(&state.pool, EntityKind::Feature, id, ChangeAction::Deleted).await;
    Ok(StatusCode::NO_CONTENT)
}
