//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::ExternalServiceError;
use crate::domain::DomainError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求校验失败
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误（已由适配器归一化）
    #[error(transparent)]
    ExternalService(#[from] ExternalServiceError),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
