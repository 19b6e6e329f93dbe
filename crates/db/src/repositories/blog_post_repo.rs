//! Repository for the `blog_posts` table.

use sqlx::PgPool;

use qoupl_core::types::DbId;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list for `blog_posts` queries.
const COLUMNS: &str = "\
    id, slug, title, excerpt, body, cover_image, is_published, published_at, \
    created_at, updated_at";

/// Provides data access for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// List posts, newest first. `published_only` filters to live posts.
    pub async fn list(pool: &PgPool, published_only: bool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts \
             WHERE ($1 = FALSE OR is_published) \
             ORDER BY COALESCE(published_at, created_at) DESC"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(published_only)
            .fetch_all(pool)
            .await
    }

    /// Find a post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Create a new post. Posts start unpublished.
    pub async fn create(pool: &PgPool, dto: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (slug, title, excerpt, body, cover_image) \
             VALUES ($1, $2, $3, COALESCE($4, ''), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&dto.slug)
            .bind(&dto.title)
            .bind(&dto.excerpt)
            .bind(&dto.body)
            .bind(&dto.cover_image)
            .fetch_one(pool)
            .await
    }

    /// Partially update a post.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                 slug = COALESCE($2, slug), \
                 title = COALESCE($3, title), \
                 excerpt = COALESCE($4, excerpt), \
                 body = COALESCE($5, body), \
                 cover_image = COALESCE($6, cover_image), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&dto.slug)
            .bind(&dto.title)
            .bind(&dto.excerpt)
            .bind(&dto.body)
            .bind(&dto.cover_image)
            .fetch_optional(pool)
            .await
    }

    /// Publish a post, stamping `published_at` on first publish only.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                 is_published = TRUE, \
                 published_at = COALESCE(published_at, NOW()), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Take a post off the public site. `published_at` is kept.
    pub async fn unpublish(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET is_published = FALSE, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total post count, for the dashboard.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(pool)
            .await
    }
}
