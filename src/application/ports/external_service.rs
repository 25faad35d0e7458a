//! External Service Error - 外部服务统一错误
//!
//! 所有适配器（支付、航班、邮件、预订 API）都把传输层错误和
//! 远端拒绝归一为这一个类型，调用方看到的错误形状与底层库无关。

use std::time::Duration;
use thiserror::Error;

/// 适配器内部可能混合出现的错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 外部服务错误
///
/// `Display` 只输出面向客户端的 message，内部原因保存在 `cause` 中用于日志
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalServiceError {
    /// 请求未拿到任何响应（连接失败、DNS、TLS 等）
    #[error("{message}")]
    Transport { message: String, cause: String },

    /// 超过配置的超时时间
    #[error("{message}")]
    Timeout { message: String, after: Duration },

    /// 远端返回非成功状态码
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// 远端返回成功但响应体无法解析
    #[error("{message}")]
    InvalidResponse { message: String, cause: String },
}

impl ExternalServiceError {
    pub fn transport(fallback: &str, cause: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: fallback.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn timeout(fallback: &str, after: Duration) -> Self {
        Self::Timeout {
            message: fallback.to_string(),
            after,
        }
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_response(fallback: &str, cause: impl std::fmt::Display) -> Self {
        Self::InvalidResponse {
            message: fallback.to_string(),
            cause: cause.to_string(),
        }
    }

    /// 归一化任意错误
    ///
    /// 已经是 `ExternalServiceError` 的原样返回，其余包装为带固定信息的 Transport 错误
    pub fn normalize(fallback: &str, err: BoxError) -> Self {
        match err.downcast::<ExternalServiceError>() {
            Ok(err) => *err,
            Err(other) => Self::transport(fallback, other),
        }
    }

    /// 面向客户端的信息
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message, .. }
            | Self::Timeout { message, .. }
            | Self::Rejected { message, .. }
            | Self::InvalidResponse { message, .. } => message,
        }
    }

    /// 错误声明的 HTTP 状态码
    ///
    /// 远端拒绝时使用远端状态码（仅限 4xx/5xx），超时为 504，其余未声明
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } if (400..600).contains(status) => Some(*status),
            Self::Timeout { .. } => Some(504),
            _ => None,
        }
    }

    /// 内部原因（仅用于日志）
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Transport { cause, .. } | Self::InvalidResponse { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_client_message_only() {
        let err = ExternalServiceError::transport("Failed to confirm payment", "connection refused");
        assert_eq!(err.to_string(), "Failed to confirm payment");
        assert_eq!(err.cause(), Some("connection refused"));
    }

    #[test]
    fn test_status_code() {
        assert_eq!(ExternalServiceError::rejected(402, "card_declined").status_code(), Some(402));
        assert_eq!(ExternalServiceError::rejected(302, "moved").status_code(), None);
        assert_eq!(
            ExternalServiceError::timeout("x", Duration::from_secs(1)).status_code(),
            Some(504)
        );
        assert_eq!(ExternalServiceError::transport("x", "y").status_code(), None);
    }

    #[test]
    fn test_normalize_keeps_uniform_errors_unchanged() {
        let original = ExternalServiceError::rejected(402, "card_declined");
        let boxed: BoxError = Box::new(original.clone());
        assert_eq!(ExternalServiceError::normalize("Failed to send email", boxed), original);
    }

    #[test]
    fn test_normalize_wraps_foreign_errors() {
        let boxed: BoxError = Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        ));
        let err = ExternalServiceError::normalize("Failed to send email", boxed);
        assert_eq!(err.to_string(), "Failed to send email");
        assert!(matches!(err, ExternalServiceError::Transport { .. }));
    }
}
