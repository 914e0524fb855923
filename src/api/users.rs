//! User Handlers
//!
//! CRUD endpoints delegating to the user repository. Unknown ids surface
//! as protocol 404s; duplicate username/email surfaces as a business error
//! from the repository.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::models::{ApiResponse, CreateUserRequest, UpdateUserRequest};

use super::handlers::AppState;

const USER_NOT_FOUND: &str = "用户不存在";

/// Handler for POST /api/users
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<ApiResponse> {
    if let Some(message) = req.validate() {
        return Err(AppError::invalid_params(message));
    }

    let user = state.users.create(&req).await?;

    Ok(ApiResponse::ok(json!(user), "用户创建成功"))
}

/// Handler for GET /api/users
pub async fn list_users_handler(State(state): State<AppState>) -> Result<ApiResponse> {
    let users = state.users.find_all().await?;

    Ok(ApiResponse::ok(json!(users), "获取用户列表成功"))
}

/// Handler for GET /api/users/:id
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

    Ok(ApiResponse::ok(json!(user), "获取用户成功"))
}

/// Handler for PUT /api/users/:id
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiResponse> {
    if req.is_empty() {
        return Err(AppError::invalid_params("请求体不能为空"));
    }
    if let Some(message) = req.validate() {
        return Err(AppError::invalid_params(message));
    }

    let user = state
        .users
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

    Ok(ApiResponse::ok(json!(user), "用户更新成功"))
}

/// Handler for DELETE /api/users/:id
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse> {
    if !state.users.delete(id).await? {
        return Err(AppError::not_found(USER_NOT_FOUND));
    }

    Ok(ApiResponse::ok(Value::Null, "用户删除成功"))
}
