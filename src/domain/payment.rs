//! Payment Context - Value Objects

use serde::{Deserialize, Serialize};

use super::DomainError;

/// 支付意图 ID（例如 `pi_3Nabc`）
///
/// 会被拼进网关 URL 路径，只允许字母、数字、`_` 和 `-`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaymentId(String);

impl PaymentId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidPaymentId("Payment ID is required".to_string()));
        }
        if id.len() > 255
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DomainError::InvalidPaymentId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PaymentId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PaymentId> for String {
    fn from(value: PaymentId) -> Self {
        value.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 金额（最小货币单位，例如 1000 表示 $10.00）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Amount(u64);

impl Amount {
    pub fn new(minor_units: u64) -> Result<Self, DomainError> {
        if minor_units == 0 {
            return Err(DomainError::InvalidAmount);
        }
        Ok(Self(minor_units))
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Amount {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for u64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}
