//! Repository for the `global_content` table.
//!
//! Documents are addressed by content key and written whole. Concurrent
//! saves of the same key resolve last write wins.

use sqlx::PgPool;

use crate::models::global_content::GlobalContent;

/// Column list for `global_content` queries.
const COLUMNS: &str = "id, content_key, content, created_at, updated_at";

/// Provides data access for site-wide content documents.
pub struct GlobalContentRepo;

impl GlobalContentRepo {
    /// List all stored content documents.
    pub async fn list(pool: &PgPool) -> Result<Vec<GlobalContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM global_content ORDER BY content_key");
        sqlx::query_as::<_, GlobalContent>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find the document for a content key.
    ///
    /// Returns `None` if the key has never been saved.
    pub async fn find_by_key(
        pool: &PgPool,
        content_key: &str,
    ) -> Result<Option<GlobalContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM global_content WHERE content_key = $1");
        sqlx::query_as::<_, GlobalContent>(&query)
            .bind(content_key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the document for a content key.
    ///
    /// Uses `ON CONFLICT (content_key) DO UPDATE` to ensure idempotent upserts.
    pub async fn upsert(
        pool: &PgPool,
        content_key: &str,
        content: &serde_json::Value,
    ) -> Result<GlobalContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO global_content (content_key, content) \
             VALUES ($1, $2) \
             ON CONFLICT (content_key) DO UPDATE SET \
                 content = EXCLUDED.content, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GlobalContent>(&query)
            .bind(content_key)
            .bind(content)
            .fetch_one(pool)
            .await
    }
}
