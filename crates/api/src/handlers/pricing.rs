//! Handlers for pricing plans.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use qoupl_core::error::CoreError;
use qoupl_core::history::{ChangeAction, EntityKind};
use qoupl_core::types::DbId;
use qoupl_db::models::pricing_plan::{CreatePricingPlan, UpdatePricingPlan};
use qoupl_db::repositories::PricingPlanRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::record_history;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /pricing-plans
pub async fn list_plans(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let plans = PricingPlanRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: plans }))
}

/// GET /pricing-plans/{id}
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let plan = PricingPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "pricing plan",
            id,
        }))?;
    Ok(Json(DataResponse { data: plan }))
}

/// POST /pricing-plans
pub async fn create_plan(
    State(state): State<AppState>,
    Json(dto): Json<CreatePricingPlan>,
) -> AppResult<impl IntoResponse> {
    let plan = PricingPlanRepo::create(&state.pool, &dto).await?;
    record_history(
        &state.pool,
        EntityKind::PricingPlan,
        plan.id,
        ChangeAction::Created,
    )
    .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: plan })))
}

/// PATCH /pricing-plans/{id}
pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(dto): Json<UpdatePricingPlan>,
) -> AppResult<impl IntoResponse> {
    let plan = PricingPlanRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "pricing plan",
            id,
        }))?;
    record_history(
        &state.pool,
        EntityKind::PricingPlan,
        id,
        ChangeAction::Updated,
    )
    .await;
    Ok(Json(DataResponse { data: plan }))
}

/// DELETE /pricing-plans/{id}
pub async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PricingPlanRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "pricing plan",
            id,
        }));
    }
    record_history(
        &state.pool,
        EntityKind::PricingPlan,
        id,
        ChangeAction::Deleted,
    )
    .await;
    Ok(StatusCode::NO_CONTENT)
}
