//! Handlers for the admin dashboard summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use qoupl_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /dashboard/summary
///
/// Entity counts for the dashboard landing view, fetched in one
/// concurrent batch.
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}
