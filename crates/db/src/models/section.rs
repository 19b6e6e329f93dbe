//! Section models and DTOs.
//!
//! Sections are the ordered content blocks of a page. The `content` column is
//! a JSONB document validated against the schema registered for the section's
//! `section_type` before every write.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub page_id: DbId,
    pub section_type: String,
    pub sort_order: i32,
    pub is_visible: bool,
    pub content: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a section.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSection {
    pub page_id: DbId,
    pub section_type: String,
    pub sort_order: Option<i32>,
    pub content: Option<serde_json::Value>,
}

/// DTO for partially updating a section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSection {
    pub sort_order: Option<i32>,
    pub is_visible: Option<bool>,
    pub content: Option<serde_json::Value>,
}

/// DTO for reordering a page's sections in one request.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderSections {
    /// Section ids in the desired display order.
    pub section_ids: Vec<DbId>,
}
