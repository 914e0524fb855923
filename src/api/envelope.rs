//! Error Envelope Middleware
//!
//! The single boundary where every failed request becomes the standard
//! `{code, message, timestamp, path}` body. Handler errors arrive as an
//! [`ErrorPayload`] response extension (see `AppError::into_response`);
//! responses the router generated itself (unmatched route, wrong method,
//! body rejections) are mapped from their HTTP status. Nothing leaves this
//! layer as a bare status or stack trace.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::error::{ErrorCode, ErrorPayload};
use crate::models::responses::{now_timestamp, ErrorBody};

/// Upper bound when reading an error body produced by the framework.
const MAX_ERROR_BODY: usize = 64 * 1024;

/// Wraps the whole router; see module docs.
pub async fn error_envelope(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let response = next.run(req).await;
    let (mut parts, body) = response.into_parts();

    // Errors raised by our handlers carry their resolved parts.
    if let Some(payload) = parts.extensions.remove::<ErrorPayload>() {
        warn!(path = %path, code = payload.code.as_u16(), "request failed: {}", payload.message);
        return error_response(parts.status, payload.code, payload.message, path);
    }

    // Errors the framework produced: map the status through the table and
    // reuse its message when one is present.
    if parts.status.is_client_error() || parts.status.is_server_error() {
        let message = match axum::body::to_bytes(body, MAX_ERROR_BODY).await {
            Ok(bytes) if !bytes.is_empty() => String::from_utf8_lossy(&bytes).into_owned(),
            _ => status_phrase(parts.status),
        };
        let code = ErrorCode::from_status(parts.status);
        warn!(path = %path, status = parts.status.as_u16(), "request failed: {}", message);
        return error_response(parts.status, code, message, path);
    }

    Response::from_parts(parts, body)
}

fn status_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("内部服务器错误")
        .to_string()
}

fn error_response(status: StatusCode, code: ErrorCode, message: String, path: String) -> Response {
    let body = ErrorBody {
        code: code.as_u16(),
        message,
        timestamp: now_timestamp(),
        path,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result as AppResult};
    use crate::models::ApiResponse;
    use axum::{body::Body, middleware, routing::get, Router};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn ok_route() -> ApiResponse {
        ApiResponse::ok(json!({"status": "ok"}), "服务运行正常")
    }

    async fn business_route() -> AppResult<ApiResponse> {
        Err(AppError::business(ErrorCode::InvalidParams, "x"))
    }

    async fn protocol_route() -> AppResult<ApiResponse> {
        Err(AppError::not_found("用户不存在"))
    }

    async fn internal_route() -> AppResult<ApiResponse> {
        Err(AppError::Internal("boom".to_string()))
    }

    fn test_app() -> Router {
        Router::new()
            .route("/ok", get(ok_route))
            .route("/business", get(business_route))
            .route("/protocol", get(protocol_route))
            .route("/internal", get(internal_route))
            .layer(middleware::from_fn(error_envelope))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_success_passes_through_untouched() {
        let (status, body) = get_json(test_app(), "/ok").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 200);
        assert_eq!(body["message"], "服务运行正常");
        assert_eq!(body["data"]["status"], "ok");
        assert!(body.get("path").is_none());
    }

    #[tokio::test]
    async fn test_business_error_is_http_200() {
        let (status, body) = get_json(test_app(), "/business").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 400);
        assert_eq!(body["message"], "x");
        assert_eq!(body["path"], "/business");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_protocol_error_keeps_status() {
        let (status, body) = get_json(test_app(), "/protocol").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
        assert_eq!(body["message"], "用户不存在");
    }

    #[tokio::test]
    async fn test_unclassified_error_is_500_unknown() {
        let (status, body) = get_json(test_app(), "/internal").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 500);
        assert_eq!(body["message"], "boom");
    }

    #[tokio::test]
    async fn test_route_miss_becomes_envelope() {
        let (status, body) = get_json(test_app(), "/no-such-route").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
        assert_eq!(body["path"], "/no-such-route");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_method_mismatch_becomes_envelope() {
        let response = test_app()
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/ok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 405);
    }
}
