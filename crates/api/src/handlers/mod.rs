//! HTTP handler modules, one per route group.

pub mod blog;
pub mod content;
pub mod dashboard;
pub mod faqs;
pub mod features;
pub mod history;
pub mod media;
pub mod pages;
pub mod pricing;
pub mod sections;
pub mod waitlist;

use qoupl_core::history::{ChangeAction, EntityKind};
use qoupl_core::types::DbId;
use qoupl_db::repositories::HistoryRepo;

/// Append a change event to the history log.
///
/// Logging must never fail the mutation it describes, so errors are
/// recorded as warnings and swallowed.
pub(crate) async fn record_history(
    pool: &qoupl_db::DbPool,
    kind: EntityKind,
    entity_id: DbId,
    action: ChangeAction,
) {
    if let Err(err) = HistoryRepo::record(pool, kind.name(), entity_id, action.name()).await {
        tracing::warn!(
            error = %err,
            entity_type = kind.name(),
            entity_id,
            action = action.name(),
            "Failed to record history event"
        );
    }
}
