//! Repository for the `features` table.

use sqlx::PgPool;

use qoupl_core::types::DbId;

use crate::models::feature::{CreateFeature, Feature, UpdateFeature};

/// Column list for `features` queries.
const COLUMNS: &str = "\
    id, title, description, icon, sort_order, is_visible, \
    created_at, updated_at";

/// Provides data access for feature highlights.
pub struct FeatureRepo;

impl FeatureRepo {
    /// List feature highlights in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features ORDER BY sort_order, id");
        sqlx::query_as::<_, Feature>(&query).fetch_all(pool).await
    }

    /// Find a feature by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features WHERE id = $1");
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new feature highlight.
    pub async fn create(pool: &PgPool, dto: &CreateFeature) -> Result<Feature, sqlx::Error> {
        let query = format!(
            "INSERT INTO features (title, description, icon, sort_order) \
             VALUES ($1, COALESCE($2, ''), $3, \
                 COALESCE($4, (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM features))) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.icon)
            .bind(dto.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Partially update a feature highlight.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateFeature,
    ) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!(
            "UPDATE features SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 icon = COALESCE($4, icon), \
                 sort_order = COALESCE($5, sort_order), \
                 is_visible = COALESCE($6, is_visible), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.icon)
            .bind(dto.sort_order)
            .bind(dto.is_visible)
            .fetch_optional(pool)
            .await
    }

    /// Delete a feature highlight by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM features WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total feature count, for the dashboard.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM features")
            .fetch_one(pool)
            .await
    }
}
