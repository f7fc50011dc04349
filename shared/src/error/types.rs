//! AppError and the JSON error body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// 请求级错误: 错误码 + 消息 + 可选的结构化细节 (resource, id, legal_id ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the default message of `code`
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Update with nothing to change
    pub fn empty_update() -> Self {
        Self::new(ErrorCode::EmptyUpdate)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

/// 错误响应体
///
/// ```json
/// { "code": 1001, "message": "Customer 7 not found", "details": { "resource": "Customer", "id": "7" } }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<AppError> for ErrorBody {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code,
            message: err.message,
            details: err.details,
        }
    }
}

// ===== Axum Integration =====

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "System error occurred");
        }

        (status, axum::Json(ErrorBody::from(self))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Body parsed as JSON but a field failed to deserialize (bad email, phone, ...)
            JsonRejection::JsonDataError(e) => Self::validation(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => {
                Self::with_message(ErrorCode::InvalidFormat, e.body_text())
            }
            other => Self::invalid_request(other.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            // e.g. `/api/customers/abc` where the id must be a number
            PathRejection::FailedToDeserializePathParams(e) => {
                Self::with_message(ErrorCode::InvalidFormat, e.body_text())
            }
            // Route registered without the params its handler extracts
            other => Self::with_message(ErrorCode::InternalError, other.body_text()),
        }
    }
}
