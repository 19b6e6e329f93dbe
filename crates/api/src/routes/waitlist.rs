//! Route definitions for waitlist signups.

use axum::routing::get;
use axum::Router;

use crate::handlers::waitlist;
use crate::state::AppState;

/// Waitlist routes mounted at `/waitlist`.
///
/// ```text
/// POST /         -> signup (public)
/// GET  /         -> list_signups
/// GET  /count    -> count_signups
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(waitlist::list_signups).post(waitlist::signup))
        .route("/count", get(waitlist::count_signups))
}
