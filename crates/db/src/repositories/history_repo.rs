//! Repository for the `content_history` table.
//!
//! Append-only: events are recorded and listed, never updated or deleted.

use sqlx::PgPool;

use qoupl_core::types::DbId;

use crate::models::history::HistoryEvent;

/// Column list for `content_history` queries.
const COLUMNS: &str = "id, entity_type, entity_id, action, created_at";

/// Provides data access for the change history log.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Append a change event.
    pub async fn record(
        pool: &PgPool,
        entity_type: &str,
        entity_id: DbId,
        action: &str,
    ) -> Result<HistoryEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_history (entity_type, entity_id, action) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoryEvent>(&query)
            .bind(entity_type)
            .bind(entity_id)
            .bind(action)
            .fetch_one(pool)
            .await
    }

    /// List the most recent events, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<HistoryEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_history \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, HistoryEvent>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List events for one entity, newest first.
    pub async fn list_for_entity(
        pool: &PgPool,
        entity_type: &str,
        entity_id: DbId,
    ) -> Result<Vec<HistoryEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_history \
             WHERE entity_type = $1 AND entity_id = $2 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, HistoryEvent>(&query)
            .bind(entity_type)
            .bind(entity_id)
            .fetch_all(pool)
            .await
    }
}
