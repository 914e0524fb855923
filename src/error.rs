//! Error types for the service
//!
//! Provides unified error handling using thiserror. Every failure raised
//! during a request funnels through [`AppError`] and is rendered as the
//! standard error envelope by the `error_envelope` middleware.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Business Error Codes ==
/// Enumerated business codes carried in the response envelope.
///
/// Values mirror the HTTP status codes they correspond to, which keeps the
/// envelope readable without a lookup table on the client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidParams,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    RequestTimeout,
    TooManyRequests,
    UnknownError,
}

impl ErrorCode {
    /// Numeric code written into the envelope's `code` field.
    pub const fn as_u16(self) -> u16 {
        match self {
            ErrorCode::InvalidParams => 400,
            ErrorCode::Unauthorized => 401,
            ErrorCode::Forbidden => 403,
            ErrorCode::NotFound => 404,
            ErrorCode::MethodNotAllowed => 405,
            ErrorCode::RequestTimeout => 408,
            ErrorCode::TooManyRequests => 429,
            ErrorCode::UnknownError => 500,
        }
    }

    /// Maps an HTTP status to a business code.
    ///
    /// Statuses outside the fixed table collapse to `UnknownError`.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ErrorCode::InvalidParams,
            StatusCode::UNAUTHORIZED => ErrorCode::Unauthorized,
            StatusCode::FORBIDDEN => ErrorCode::Forbidden,
            StatusCode::NOT_FOUND => ErrorCode::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => ErrorCode::MethodNotAllowed,
            StatusCode::REQUEST_TIMEOUT => ErrorCode::RequestTimeout,
            StatusCode::TOO_MANY_REQUESTS => ErrorCode::TooManyRequests,
            _ => ErrorCode::UnknownError,
        }
    }
}

// == App Error Enum ==
/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum AppError {
    /// Application-level failure. Rendered with HTTP 200; callers
    /// distinguish failure via the envelope `code`, not the HTTP status.
    #[error("{message}")]
    Business { code: ErrorCode, message: String },

    /// Transport-level failure (bad input, missing resource, auth).
    /// The HTTP status is preserved and mapped to a code via the table.
    #[error("{message}")]
    Protocol { status: StatusCode, message: String },

    /// Redis connectivity or command failure.
    #[error("缓存服务异常: {0}")]
    Store(#[from] redis::RedisError),

    /// Database failure.
    #[error("数据库异常: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Creates a business error with an explicit code.
    pub fn business(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::Business {
            code,
            message: message.into(),
        }
    }

    /// Protocol 400 with an INVALID_PARAMS code.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        AppError::Protocol {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Protocol 404 with a NOT_FOUND code.
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::Protocol {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Resolves the error into its HTTP status, envelope code and message.
    pub fn resolve(self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::Business { code, message } => (StatusCode::OK, code, message),
            AppError::Protocol { status, message } => {
                (status, ErrorCode::from_status(status), message)
            }
            AppError::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::UnknownError,
                err.to_string(),
            ),
            AppError::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::UnknownError,
                err.to_string(),
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::UnknownError,
                message,
            ),
        }
    }
}

// == Error Payload ==
/// Resolved error parts attached to the response as an extension.
///
/// The `error_envelope` middleware picks this up and writes the final
/// `{code, message, timestamp, path}` body; `IntoResponse` on its own has no
/// access to the request path, so the body is deferred to the middleware.
#[derive(Debug, Clone)]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.resolve();
        let mut response = status.into_response();
        response
            .extensions_mut()
            .insert(ErrorPayload { code, message });
        response
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handling.
pub type Result<T> = std::result::Result<T, AppError>;
