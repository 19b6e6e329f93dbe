//! FAQ models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub sort_order: i32,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an FAQ entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaq {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for partially updating an FAQ entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFaq {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_visible: Option<bool>,
}
