//! Pricing plan models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `pricing_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PricingPlan {
    pub id: DbId,
    pub name: String,
    pub tagline: Option<String>,
    pub price_cents: i32,
    pub billing_period: String,
    /// Plan perks as a JSON array of strings.
    pub perks: serde_json::Value,
    pub is_highlighted: bool,
    pub sort_order: i32,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a pricing plan.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePricingPlan {
    pub name: String,
    pub tagline: Option<String>,
    pub price_cents: i32,
    pub billing_period: Option<String>,
    pub perks: Option<serde_json::Value>,
    pub is_highlighted: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for partially updating a pricing plan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePricingPlan {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub price_cents: Option<i32>,
    pub billing_period: Option<String>,
    pub perks: Option<serde_json::Value>,
    pub is_highlighted: Option<bool>,
    pub sort_order: Option<i32>,
    pub is_visible: Option<bool>,
}
