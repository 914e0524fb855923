//! Cache Module
//!
//! Adapter and typed facade for the external Redis store. The store owns
//! TTL expiry, eviction and atomicity of individual operations; nothing is
//! re-implemented locally.

mod client;
mod facade;

// Re-export public types
pub use client::connect;
pub use facade::CacheService;
