//! Waitlist signup models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use qoupl_core::types::{DbId, Timestamp};

/// A row from the `waitlist_signups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WaitlistSignup {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for the public signup form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWaitlistSignup {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}
