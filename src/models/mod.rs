//! Request and Response models for the API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, plus the
//! uniform response envelope every endpoint shares.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    CreateUserRequest, HgetCacheRequest, HsetCacheRequest, KeyRequest, SetCacheRequest,
    UpdateUserRequest,
};
pub use responses::{wrap, ApiResponse, ErrorBody, DEFAULT_SUCCESS_MESSAGE};
