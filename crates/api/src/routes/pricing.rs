//! Route definitions for pricing plans.

use axum::routing::get;
use axum::Router;

use crate::handlers::pricing;
use crate::state::AppState;

/// Pricing routes mounted at `/pricing-plans`.
///
/// ```text
/// GET    /        -> list_plans
/// POST   /        -> create_plan
/// GET    /{id}    -> get_plan
/// PATCH  /{id}    -> update_plan
/// DELETE /{id}    -> delete_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pricing::list_plans).post(pricing::create_plan))
        .route(
            "/{id}",
            get(pricing::get_plan)
                .patch(pricing::update_plan)
                .delete(pricing::delete_plan),
        )
}
