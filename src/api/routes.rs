//! API Routes
//!
//! Configures the Axum router with all endpoints under the `/api` prefix.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::envelope::error_envelope;
use super::handlers::{
    cache_del_handler, cache_get_handler, cache_hget_handler, cache_hset_handler,
    cache_set_handler, health_handler, AppState,
};
use super::users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints (all under `/api`)
/// - `GET  /health` - Health check
/// - `POST /cache/set`, `GET /cache/get`, `POST /cache/del` - String cache
/// - `POST /cache/hset`, `GET /cache/hget` - Hash cache
/// - `POST /users`, `GET /users`, `GET|PUT|DELETE /users/:id` - User CRUD
///
/// # Middleware
/// - Error envelope: every failure body becomes `{code, message, timestamp, path}`
/// - CORS: allows any origin (configurable for production)
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/cache/set", post(cache_set_handler))
        .route("/cache/get", get(cache_get_handler))
        .route("/cache/del", post(cache_del_handler))
        .route("/cache/hset", post(cache_hset_handler))
        .route("/cache/hget", get(cache_hget_handler))
        .route(
            "/users",
            post(create_user_handler).get(list_users_handler),
        )
        .route(
            "/users/:id",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .with_state(state);

    // The envelope layer sits inside cors/trace so router-level misses
    // (404/405) are also rewritten before leaving the stack.
    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn(error_envelope))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
