//! User repository
//!
//! Data access for user records over a shared sqlx Postgres pool. Queries
//! are runtime-bound so the crate builds without a live database.

use sqlx::PgPool;

use crate::error::{AppError, ErrorCode, Result};
use crate::models::{CreateUserRequest, UpdateUserRequest};

use super::model::User;

const USER_COLUMNS: &str = "id, username, email, password, nickname, created_at, updated_at";

/// Repository over the shared connection pool.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user. A duplicate username or email surfaces as a
    /// business error rather than a bare constraint violation.
    pub async fn create(&self, req: &CreateUserRequest) -> Result<User> {
        let sql = format!(
            "INSERT INTO users (username, email, password, nickname) \
             VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&req.username)
            .bind(&req.email)
            .bind(&req.password)
            .bind(&req.nickname)
            .fetch_one(&self.pool)
            .await
            .map_err(map_unique_violation)?;
        Ok(user)
    }

    /// Returns all users ordered by id.
    pub async fn find_all(&self) -> Result<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Applies a partial update; absent fields keep their stored value.
    /// Returns `None` when the id does not exist.
    pub async fn update(&self, id: i32, req: &UpdateUserRequest) -> Result<Option<User>> {
        let sql = format!(
            "UPDATE users SET \
                username = COALESCE($2, username), \
                email = COALESCE($3, email), \
                password = COALESCE($4, password), \
                nickname = COALESCE($5, nickname), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(&req.username)
            .bind(&req.email)
            .bind(&req.password)
            .bind(&req.nickname)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_unique_violation)?;
        Ok(user)
    }

    /// Deletes a user by id; returns `true` when a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Postgres unique_violation (23505) on the users table means a taken
/// username or email; everything else passes through unmodified.
fn map_unique_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return AppError::business(ErrorCode::InvalidParams, "用户名或邮箱已存在");
        }
    }
    AppError::from(err)
}
