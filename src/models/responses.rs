//! Response envelope for the API
//!
//! Every HTTP response body has the shape `{code, message, data, timestamp}`.
//! Success bodies are built here; error bodies are built by the
//! `error_envelope` middleware with the same outer shape plus the request
//! path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

/// Fallback message when a route does not supply its own.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "操作成功";

/// Current time as an ISO-8601 / RFC-3339 string with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Wraps a handler result into the standard envelope.
///
/// Idempotent: a value that already carries `code`, `message` and `data`
/// keys is returned unchanged, so handlers that build an envelope by hand
/// are not double-wrapped.
pub fn wrap(data: Value, message: Option<&str>) -> Value {
    if let Value::Object(map) = &data {
        if map.contains_key("code") && map.contains_key("message") && map.contains_key("data") {
            return data;
        }
    }

    json!({
        "code": 200,
        "message": message.unwrap_or(DEFAULT_SUCCESS_MESSAGE),
        "data": data,
        "timestamp": now_timestamp(),
    })
}

// == Success Response ==
/// A wrapped success body, ready to serialize.
#[derive(Debug, Clone)]
pub struct ApiResponse(Value);

impl ApiResponse {
    /// Wraps `data` with a per-route success message.
    pub fn ok(data: Value, message: &str) -> Self {
        Self(wrap(data, Some(message)))
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

// == Error Response Body ==
/// Body written for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Business code (see `ErrorCode`)
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// ISO-8601 timestamp
    pub timestamp: String,
    /// Request path that failed
    pub path: String,
}
