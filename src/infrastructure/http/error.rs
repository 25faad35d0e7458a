//! HTTP Error Handling
//!
//! 所有失败响应在这里统一决定状态码，响应体为 `{ message, statusCode }`

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, ExternalServiceError};
use crate::domain::DomainError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// 未预期错误对客户端展示的信息
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// 请求超过服务端截止时间时的信息
pub const REQUEST_TIMEOUT_MESSAGE: &str = "Request timed out";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体格式错误或校验失败
    BadRequest(String),
    NotFound(String),
    /// 路径存在但方法不匹配
    MethodNotAllowed(String),
    /// 请求在进入处理器前被拒绝（请求体过大、缺少 Content-Type 等），状态码由拒绝方声明
    Rejected(StatusCode, String),
    /// 外部服务错误，状态码由错误自身声明
    Upstream(ExternalServiceError),
    /// 请求处理超过服务端截止时间
    Timeout,
    /// 内部错误，详情只进日志
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Rejected(status, _) => *status,
            ApiError::Upstream(err) => err
                .status_code()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::MethodNotAllowed(msg)
            | ApiError::Rejected(_, msg) => msg.clone(),
            ApiError::Upstream(err) => err.message().to_string(),
            ApiError::Timeout => REQUEST_TIMEOUT_MESSAGE.to_string(),
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            message: self.message(),
            status_code: self.status().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = self.envelope();

        match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = envelope.status_code, error = %msg, "Bad request");
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(status = envelope.status_code, error = %msg, "Resource not found");
            }
            ApiError::MethodNotAllowed(msg) => {
                tracing::warn!(status = envelope.status_code, error = %msg, "Method not allowed");
            }
            ApiError::Rejected(_, msg) => {
                tracing::warn!(status = envelope.status_code, error = %msg, "Request rejected");
            }
            ApiError::Upstream(err) => {
                tracing::error!(
                    status = envelope.status_code,
                    error = %err,
                    cause = err.cause().unwrap_or(""),
                    "External service error"
                );
            }
            ApiError::Timeout => {
                tracing::error!(status = envelope.status_code, "Request deadline exceeded");
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = envelope.status_code, error = %msg, "Internal server error");
            }
        }

        (self.status(), Json(envelope)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::ExternalService(err) => ApiError::Upstream(err),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ExternalServiceError> for ApiError {
    fn from(e: ExternalServiceError) -> Self {
        ApiError::Upstream(e)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

/// JSON 语法或字段错误按校验失败处理（400），其余拒绝保留自身状态码（413、415 等）
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(rejection.body_text())
            }
            status => ApiError::Rejected(status, rejection.body_text()),
        }
    }
}
