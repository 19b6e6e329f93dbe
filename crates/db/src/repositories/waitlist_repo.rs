//! Repository for the `waitlist_signups` table.
//!
//! Duplicate emails surface as a unique constraint violation, which the api
//! layer maps to a conflict response.

use sqlx::PgPool;

use crate::models::waitlist::{CreateWaitlistSignup, WaitlistSignup};

/// Column list for `waitlist_signups` queries.
const COLUMNS: &str = "id, name, email, age, created_at";

/// Provides data access for waitlist signups.
pub struct WaitlistRepo;

impl WaitlistRepo {
    /// List signups, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<WaitlistSignup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitlist_signups ORDER BY created_at DESC");
        sqlx::query_as::<_, WaitlistSignup>(&query)
            .fetch_all(pool)
            .await
    }

    /// Record a signup from the public form.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateWaitlistSignup,
    ) -> Result<WaitlistSignup, sqlx::Error> {
        let query = format!(
            "INSERT INTO waitlist_signups (name, email, age) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaitlistSignup>(&query)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(dto.age)
            .fetch_one(pool)
            .await
    }

    /// Total signup count.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM waitlist_signups")
            .fetch_one(pool)
            .await
    }
}
