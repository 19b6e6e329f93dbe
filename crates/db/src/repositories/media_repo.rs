//! Repository for the `media_assets` table.

use sqlx::PgPool;

use qoupl_core::types::DbId;

use crate::models::media::{CreateMediaAsset, MediaAsset};

/// Column list for `media_assets` queries.
const COLUMNS: &str = "\
    id, file_name, object_path, content_type, size_bytes, public_url, created_at";

/// Provides data access for uploaded media records.
pub struct MediaRepo;

impl MediaRepo {
    /// List uploads, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MediaAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_assets ORDER BY created_at DESC");
        sqlx::query_as::<_, MediaAsset>(&query).fetch_all(pool).await
    }

    /// Find an upload record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_assets WHERE id = $1");
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record a completed upload.
    pub async fn create(pool: &PgPool, dto: &CreateMediaAsset) -> Result<MediaAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_assets \
                 (file_name, object_path, content_type, size_bytes, public_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(&dto.file_name)
            .bind(&dto.object_path)
            .bind(&dto.content_type)
            .bind(dto.size_bytes)
            .bind(&dto.public_url)
            .fetch_one(pool)
            .await
    }

    /// Delete an upload record by ID.
    ///
    /// Returns `true` if a row was deleted. The stored object is not touched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media_assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
