//! Repository for the `pages` table.

use sqlx::PgPool;

use qoupl_core::types::DbId;

use crate::models::page::{CreatePage, Page, UpdatePage};

/// Column list for `pages` queries.
const COLUMNS: &str = "\
    id, slug, title, description, is_published, created_at, updated_at";

/// Provides data access for pages.
pub struct PageRepo;

impl PageRepo {
    /// List all pages ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages ORDER BY slug");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    /// Find a page by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a page by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Create a new page. New pages start unpublished.
    pub async fn create(pool: &PgPool, dto: &CreatePage) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (slug, title, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(&dto.slug)
            .bind(&dto.title)
            .bind(&dto.description)
            .fetch_one(pool)
            .await
    }

    /// Partially update a page.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET \
                 slug = COALESCE($2, slug), \
                 title = COALESCE($3, title), \
                 description = COALESCE($4, description), \
                 is_published = COALESCE($5, is_published), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(&dto.slug)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a page by ID. Sections cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total page count, for the dashboard.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pages")
            .fetch_one(pool)
            .await
    }
}
