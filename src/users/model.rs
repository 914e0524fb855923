//! User entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A user record as stored in Postgres.
///
/// The password column is read for persistence round-trips but never
/// serialized back to callers.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub nickname: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
