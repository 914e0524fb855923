//! userhub - user-management HTTP service with a Redis-backed cache facade
//!
//! Exposes user CRUD endpoints over Postgres and a generic key/value cache
//! facade over Redis, with a uniform response envelope on every route.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod users;

pub use api::AppState;
pub use config::Config;
