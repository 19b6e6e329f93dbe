//! Media asset models.
//!
//! Rows record uploads to object storage; the bytes themselves live in the
//! storage bucket, not the database.

use serde::Serialize;
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `media_assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaAsset {
    pub id: DbId,
    pub file_name: String,
    pub object_path: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub public_url: String,
    pub created_at: Timestamp,
}

/// Insert parameters for a completed upload.
#[derive(Debug, Clone)]
pub struct CreateMediaAsset {
    pub file_name: String,
    pub object_path: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub public_url: String,
}
