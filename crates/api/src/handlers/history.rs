//! Handlers for the change history view.
//!
//! The log stores only identifiers, so each event's human-readable summary
//! is reconstructed here at read time. Lookups for a page of events run
//! concurrently, and a summary that cannot be resolved (deleted target,
//! unknown type, transient lookup failure) degrades to `null` rather than
//! failing the whole request.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use qoupl_core::history::{section_display_title, EntityKind, EntitySnapshot};
use qoupl_core::types::{DbId, Timestamp};
use qoupl_db::models::history::HistoryEvent;
use qoupl_db::repositories::{
    BlogPostRepo, FaqRepo, FeatureRepo, HistoryRepo, PageRepo, PricingPlanRepo, SectionRepo,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

/// Query parameters for `GET /history`.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Maximum events to return. Defaults to 50, capped at 200.
    pub limit: Option<i64>,
}

/// A change event with its reconstructed summary.
#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub id: DbId,
    pub entity_type: String,
    pub entity_id: DbId,
    pub action: String,
    pub created_at: Timestamp,
    /// `null` when the target no longer exists or could not be resolved.
    pub summary: Option<EntitySnapshot>,
}

/// GET /history
///
/// The most recent change events, newest first, each with a display-ready
/// summary of its target entity.
pub async fn list_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let events = HistoryRepo::list_recent(&state.pool, limit).await?;

    // One lookup per event, all in flight at once.
    let summaries = futures::future::join_all(
        events.iter().map(|event| resolve_summary(&state.pool, event)),
    )
    .await;

    let items: Vec<HistoryItem> = events
        .into_iter()
        .zip(summaries)
        .map(|(event, summary)| HistoryItem {
            id: event.id,
            entity_type: event.entity_type,
            entity_id: event.entity_id,
            action: event.action,
            created_at: event.created_at,
            summary,
        })
        .collect();

    Ok(Json(DataResponse { data: items }))
}

/// Reconstruct the summary for one event. Never fails: every miss becomes
/// `None` with a warning.
async fn resolve_summary(pool: &qoupl_db::DbPool, event: &HistoryEvent) -> Option<EntitySnapshot> {
    let kind = match EntityKind::from_name(&event.entity_type) {
        Ok(kind) => kind,
        Err(_) => {
            tracing::warn!(
                entity_type = %event.entity_type,
                event_id = event.id,
                "History event references an unknown entity type"
            );
            return None;
        }
    };

    let result = lookup_snapshot(pool, kind, event.entity_id).await;
    match result {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(
                error = %err,
                entity_type = kind.name(),
                entity_id = event.entity_id,
                "Failed to resolve history summary"
            );
            None
        }
    }
}

async fn lookup_snapshot(
    pool: &qoupl_db::DbPool,
    kind: EntityKind,
    id: DbId,
) -> Result<Option<EntitySnapshot>, sqlx::Error> {
    let snapshot = match kind {
        EntityKind::Page => PageRepo::find_by_id(pool, id)
            .await?
            .map(|page| EntitySnapshot::new(kind, page.title)),
        EntityKind::Section => match SectionRepo::find_by_id(pool, id).await? {
            Some(section) => {
                let title = section_display_title(&section.content, &section.section_type);
                let snapshot = EntitySnapshot::new(kind, title);
                // Attach the owning page's title when it still exists.
                let snapshot = match PageRepo::find_by_id(pool, section.page_id).await? {
                    Some(page) => snapshot.with_parent(page.title),
                    None => snapshot,
                };
                Some(snapshot)
            }
            None => None,
        },
        EntityKind::BlogPost => BlogPostRepo::find_by_id(pool, id)
            .await?
            .map(|post| EntitySnapshot::new(kind, post.title)),
        EntityKind::Faq => FaqRepo::find_by_id(pool, id)
            .await?
            .map(|faq| EntitySnapshot::new(kind, faq.question)),
        EntityKind::Feature => FeatureRepo::find_by_id(pool, id)
            .await?
            .map(|feature| EntitySnapshot::new(kind, feature.title)),
        EntityKind::PricingPlan => PricingPlanRepo::find_by_id(pool, id)
            .await?
            .map(|plan| EntitySnapshot::new(kind, plan.name)),
    };
    Ok(snapshot)
}
