//! JSON error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use readily_core::ReadilyError;
use tracing::error;

/// An error rendered as `{"error": "<message>"}` with a matching status.
#[derive(Debug)]
pub enum ApiError {
    /// 400 - body could not be decoded.
    BadRequest(String),
    /// 401 - no token, or an unknown one.
    Unauthorized(String),
    /// 422 - the message was understood but cannot be executed.
    Unprocessable(String),
    /// 502 - the catalog failed.
    BadGateway(String),
    /// 500
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::BadGateway(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl From<ReadilyError> for ApiError {
    fn from(err: ReadilyError) -> Self {
        if err.is_user_error() {
            return ApiError::Unprocessable(err.to_string());
        }
        match err {
            ReadilyError::SessionNotFound(_) => ApiError::Unauthorized(err.to_string()),
            ReadilyError::Catalog(_) => {
                error!(error = %err, "Catalog request failed");
                ApiError::BadGateway(err.to_string())
            }
            other => {
                error!(error = %other, "Internal error");
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message() });
        (self.status(), Json(body)).into_response()
    }
}
