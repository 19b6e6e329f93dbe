//! Handlers for waitlist signups.
//!
//! The signup endpoint is the one public write surface of the API; the
//! listing is for the admin panel.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use qoupl_db::models::waitlist::CreateWaitlistSignup;
use qoupl_db::repositories::WaitlistRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /waitlist
///
/// Record a signup from the public form. A duplicate email maps to 409
/// via the unique constraint.
pub async fn signup(
    State(state): State<AppState>,
    Json(dto): Json<CreateWaitlistSignup>,
) -> AppResult<impl IntoResponse> {
    if dto.email.trim().is_empty() || !dto.email.contains('@') {
        return Err(AppError::BadRequest("A valid email is required".into()));
    }
    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest("A name is required".into()));
    }

    let signup = WaitlistRepo::create(&state.pool, &dto).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: signup })))
}

/// GET /waitlist
pub async fn list_signups(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let signups = WaitlistRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: signups }))
}

/// Response body for `GET /waitlist/count`.
#[derive(Debug, Serialize)]
pub struct SignupCount {
    pub count: i64,
}

/// GET /waitlist/count
pub async fn count_signups(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = WaitlistRepo::count(&state.pool).await?;
    Ok(Json(DataResponse {
        data: SignupCount { count },
    }))
}
