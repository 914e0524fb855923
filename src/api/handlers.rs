//! API Handlers
//!
//! HTTP request handlers for the health and cache endpoints. Each cache
//! handler validates its body, delegates to the facade and wraps the result
//! in the success envelope with its per-route message.

use axum::{extract::State, Json};
use serde_json::json;

use crate::cache::CacheService;
use crate::error::{AppError, Result};
use crate::models::{ApiResponse, HgetCacheRequest, HsetCacheRequest, KeyRequest, SetCacheRequest};
use crate::users::UserRepository;

/// Application state shared across all handlers.
///
/// Holds the shared Redis connection and the Postgres-backed user
/// repository; both are cheap clones over connections created once in
/// `main`.
#[derive(Clone)]
pub struct AppState {
    pub cache: CacheService,
    pub users: UserRepository,
}

impl AppState {
    pub fn new(cache: CacheService, users: UserRepository) -> Self {
        Self { cache, users }
    }
}

/// Handler for GET /api/health
pub async fn health_handler() -> ApiResponse {
    ApiResponse::ok(json!({ "status": "ok" }), "服务运行正常")
}

/// Handler for POST /api/cache/set
pub async fn cache_set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetCacheRequest>,
) -> Result<ApiResponse> {
    if let Some(message) = req.validate() {
        return Err(AppError::invalid_params(message));
    }

    state.cache.set(&req.key, &req.value, req.ttl).await?;

    Ok(ApiResponse::ok(json!({ "success": true }), "缓存设置成功"))
}

/// Handler for GET /api/cache/get
///
/// An absent key is not an error; `value` comes back as null.
pub async fn cache_get_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<ApiResponse> {
    if let Some(message) = req.validate() {
        return Err(AppError::invalid_params(message));
    }

    let value = state.cache.get(&req.key).await?;

    Ok(ApiResponse::ok(json!({ "value": value }), "获取缓存成功"))
}

/// Handler for POST /api/cache/del
pub async fn cache_del_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<ApiResponse> {
    if let Some(message) = req.validate() {
        return Err(AppError::invalid_params(message));
    }

    state.cache.del(&req.key).await?;

    Ok(ApiResponse::ok(json!({ "success": true }), "缓存删除成功"))
}

/// Handler for POST /api/cache/hset
pub async fn cache_hset_handler(
    State(state): State<AppState>,
    Json(req): Json<HsetCacheRequest>,
) -> Result<ApiResponse> {
    if let Some(message) = req.validate() {
        return Err(AppError::invalid_params(message));
    }

    state.cache.hset(&req.key, &req.field, &req.value).await?;

    Ok(ApiResponse::ok(
        json!({ "success": true }),
        "Hash 字段设置成功",
    ))
}

/// Handler for GET /api/cache/hget
pub async fn cache_hget_handler(
    State(state): State<AppState>,
    Json(req): Json<HgetCacheRequest>,
) -> Result<ApiResponse> {
    if let Some(message) = req.validate() {
        return Err(AppError::invalid_params(message));
    }

    let value = state.cache.hget(&req.key, &req.field).await?;

    Ok(ApiResponse::ok(
        json!({ "value": value }),
        "获取 Hash 字段成功",
    ))
}
