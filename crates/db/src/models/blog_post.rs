//! Blog post models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_image: Option<String>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post. Posts start unpublished.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub cover_image: Option<String>,
}

/// DTO for partially updating a blog post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlogPost {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub cover_image: Option<String>,
}
