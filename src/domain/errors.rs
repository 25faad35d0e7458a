//! Domain Errors

use thiserror::Error;

/// 领域校验错误
///
/// 所有值对象与请求结构的校验失败都归入这里，
/// 应用层统一转换为 ValidationError（HTTP 400）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid payment id: {0}")]
    InvalidPaymentId(String),

    #[error("Amount must be greater than 0")]
    InvalidAmount,

    #[error("Currency must be a 3-letter ISO code: {0}")]
    InvalidCurrency(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid booking reference: {0}")]
    InvalidBookingReference(String),

    #[error("Invalid IATA code: {0}")]
    InvalidIataCode(String),

    #[error("Invalid carrier code: {0}")]
    InvalidCarrierCode(String),

    #[error("Invalid date format. Use YYYY-MM-DD: {0}")]
    InvalidDate(String),

    #[error("Invalid time format. Use HH:MM:SS: {0}")]
    InvalidTime(String),

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{0}")]
    InvalidRequest(String),
}

impl DomainError {
    pub fn empty(field: &'static str) -> Self {
        Self::Empty { field }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}
