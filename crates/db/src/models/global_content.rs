//! Site-wide content document models.
//!
//! One row per content key (`navbar`, `footer`, ...). The document is always
//! written whole; concurrent saves resolve last write wins.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `global_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GlobalContent {
    pub id: DbId,
    pub content_key: String,
    pub content: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a content document.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveGlobalContent {
    pub content: serde_json::Value,
}
