//! Page models and DTOs.
//!
//! A page is a routable unit of the marketing site (`/`, `/pricing`, ...);
//! its visible content lives in the page's sections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a page.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePage {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
}

/// DTO for partially updating a page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePage {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_published: Option<bool>,
}
