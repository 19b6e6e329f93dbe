//! Repository for the `sections` table.
//!
//! Content validation against the section type's schema happens in the api
//! layer before these methods are called; the repository stores whatever
//! JSONB document it is given.

use sqlx::PgPool;

use qoupl_core::types::DbId;

use crate::models::section::{CreateSection, Section, UpdateSection};

/// Column list for `sections` queries.
const COLUMNS: &str = "\
    id, page_id, section_type, sort_order, is_visible, content, \
    created_at, updated_at";

/// Provides data access for page sections.
pub struct SectionRepo;

impl SectionRepo {
    /// List a page's sections in display order.
    pub async fn list_for_page(pool: &PgPool, page_id: DbId) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections \
             WHERE page_id = $1 \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    /// Find a section by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = $1");
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new section.
    ///
    /// When no sort order is given the section is appended after the page's
    /// current last section.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateSection,
        content: &serde_json::Value,
    ) -> Result<Section, sqlx::Error> {
        let query = format!(
            "INSERT INTO sections (page_id, section_type, sort_order, content) \
             VALUES ($1, $2, \
                 COALESCE($3, (SELECT COALESCE(MAX(sort_order), -1) + 1 \
                               FROM sections WHERE page_id = $1)), \
                 $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(dto.page_id)
            .bind(&dto.section_type)
            .bind(dto.sort_order)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Partially update a section.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateSection,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET \
                 sort_order = COALESCE($2, sort_order), \
                 is_visible = COALESCE($3, is_visible), \
                 content = COALESCE($4, content), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(dto.sort_order)
            .bind(dto.is_visible)
            .bind(&dto.content)
            .fetch_optional(pool)
            .await
    }

    /// Replace a section's content document.
    pub async fn set_content(
        pool: &PgPool,
        id: DbId,
        content: &serde_json::Value,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET content = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Rewrite the sort order of a page's sections to match `section_ids`.
    ///
    /// Runs in a transaction; ids not belonging to the page are ignored by
    /// the `page_id` guard.
    pub async fn reorder(
        pool: &PgPool,
        page_id: DbId,
        section_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (position, section_id) in section_ids.iter().enumerate() {
            sqlx::query(
                "UPDATE sections SET sort_order = $1, updated_at = NOW() \
                 WHERE id = $2 AND page_id = $3",
            )
            .bind(position as i32)
            .bind(section_id)
            .bind(page_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await
    }

    /// Delete a section by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total section count, for the dashboard.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM sections")
            .fetch_one(pool)
            .await
    }
}
