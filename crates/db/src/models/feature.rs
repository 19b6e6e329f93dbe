//! Feature highlight models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feature {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a feature highlight.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeature {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for partially updating a feature highlight.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFeature {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
    pub is_visible: Option<bool>,
}
