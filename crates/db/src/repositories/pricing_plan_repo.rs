//! Repository for the `pricing_plans` table.

use sqlx::PgPool;

use qoupl_core::types::DbId;

use crate::models::pricing_plan::{CreatePricingPlan, PricingPlan, UpdatePricingPlan};

/// Column list for `pricing_plans` queries.
const COLUMNS: &str = "\
    id, name, tagline, price_cents, billing_period, perks, is_highlighted, \
    sort_order, is_visible, created_at, updated_at";

/// Provides data access for pricing plans.
pub struct PricingPlanRepo;

impl PricingPlanRepo {
    /// List pricing plans in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<PricingPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pricing_plans ORDER BY sort_order, id");
        sqlx::query_as::<_, PricingPlan>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a pricing plan by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PricingPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pricing_plans WHERE id = $1");
        sqlx::query_as::<_, PricingPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new pricing plan.
    pub async fn create(pool: &PgPool, dto: &CreatePricingPlan) -> Result<PricingPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO pricing_plans \
                 (name, tagline, price_cents, billing_period, perks, is_highlighted, sort_order) \
             VALUES ($1, $2, $3, COALESCE($4, 'monthly'), COALESCE($5, '[]'::jsonb), \
                 COALESCE($6, FALSE), \
                 COALESCE($7, (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM pricing_plans))) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PricingPlan>(&query)
            .bind(&dto.name)
            .bind(&dto.tagline)
            .bind(dto.price_cents)
            .bind(&dto.billing_period)
            .bind(&dto.perks)
            .bind(dto.is_highlighted)
            .bind(dto.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Partially update a pricing plan.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdatePricingPlan,
    ) -> Result<Option<PricingPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE pricing_plans SET \
                 name = COALESCE($2, name), \
                 tagline = COALESCE($3, tagline), \
                 price_cents = COALESCE($4, price_cents), \
                 billing_period = COALESCE($5, billing_period), \
                 perks = COALESCE($6, perks), \
                 is_highlighted = COALESCE($7, is_highlighted), \
                 sort_order = COALESCE($8, sort_order), \
                 is_visible = COALESCE($9, is_visible), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PricingPlan>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.tagline)
            .bind(dto.price_cents)
            .bind(&dto.billing_period)
            .bind(&dto.perks)
            .bind(dto.is_highlighted)
            .bind(dto.sort_order)
            .bind(dto.is_visible)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pricing plan by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pricing_plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total plan count, for the dashboard.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pricing_plans")
            .fetch_one(pool)
            .await
    }
}
