//! API Module
//!
//! HTTP handlers, routing and the response/error envelope pipeline.
//!
//! # Endpoints (prefix `/api`)
//! - `GET  /health` - Health check
//! - `POST /cache/set` - Store a key with optional TTL
//! - `GET  /cache/get` - Retrieve a key
//! - `POST /cache/del` - Delete a key
//! - `POST /cache/hset` - Set a hash field
//! - `GET  /cache/hget` - Retrieve a hash field
//! - `POST /users` / `GET /users` / `GET|PUT|DELETE /users/:id` - User CRUD

pub mod envelope;
pub mod handlers;
pub mod routes;
pub mod users;

pub use handlers::AppState;
pub use routes::create_router;
