//! Change history models.
//!
//! The `content_history` table is append-only and stores identifiers only;
//! human-readable summaries are reconstructed at read time by the api layer.

use serde::Serialize;
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `content_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryEvent {
    pub id: DbId,
    pub entity_type: String,
    pub entity_id: DbId,
    pub action: String,
    pub created_at: Timestamp,
}
