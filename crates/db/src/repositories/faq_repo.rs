//! Repository for the `faqs` table.

use sqlx::PgPool;

use qoupl_core::types::DbId;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};

/// Column list for `faqs` queries.
const COLUMNS: &str = "\
    id, question, answer, category, sort_order, is_visible, \
    created_at, updated_at";

/// Provides data access for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    /// List FAQ entries in display order, optionally filtered by category.
    pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faqs \
             WHERE ($1::text IS NULL OR category = $1) \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Find an FAQ entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new FAQ entry.
    pub async fn create(pool: &PgPool, dto: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (question, answer, category, sort_order) \
             VALUES ($1, $2, COALESCE($3, 'general'), \
                 COALESCE($4, (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM faqs))) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&dto.question)
            .bind(&dto.answer)
            .bind(&dto.category)
            .bind(dto.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Partially update an FAQ entry.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET \
                 question = COALESCE($2, question), \
                 answer = COALESCE($3, answer), \
                 category = COALESCE($4, category), \
                 sort_order = COALESCE($5, sort_order), \
                 is_visible = COALESCE($6, is_visible), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&dto.question)
            .bind(&dto.answer)
            .bind(&dto.category)
            .bind(dto.sort_order)
            .bind(dto.is_visible)
            .fetch_optional(pool)
            .await
    }

    /// Delete an FAQ entry by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total FAQ count, for the dashboard.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM faqs")
            .fetch_one(pool)
            .await
    }
}
