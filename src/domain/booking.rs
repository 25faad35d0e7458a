//! Booking Context - 预订确认

use serde::{Deserialize, Serialize};

use super::{DomainError, EmailAddress};

/// 预订编号（PNR 等）
///
/// 会出现在邮件主题中，只允许字母、数字和 `-`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingReference(String);

impl BookingReference {
    pub fn new(reference: impl Into<String>) -> Result<Self, DomainError> {
        let reference = reference.into();
        if reference.is_empty()
            || reference.len() > 64
            || !reference
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(DomainError::InvalidBookingReference(reference));
        }
        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookingReference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BookingReference> for String {
    fn from(value: BookingReference) -> Self {
        value.0
    }
}

impl std::fmt::Display for BookingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 乘客
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
}

impl Passenger {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// 发送预订确认邮件请求
///
/// 客户端通常会附带完整的行程、价格等信息，这里只关心发信所需字段
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmationRequest {
    pub email: EmailAddress,
    pub booking_reference: BookingReference,
    pub passengers: Vec<Passenger>,
}

impl BookingConfirmationRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.passengers.is_empty() {
            return Err(DomainError::empty("passengers"));
        }
        for passenger in &self.passengers {
            if passenger.first_name.trim().is_empty() || passenger.last_name.trim().is_empty() {
                return Err(DomainError::invalid_request(
                    "passenger must have a first and last name",
                ));
            }
        }
        Ok(())
    }

    /// 主乘客姓名（邮件称呼使用）
    pub fn lead_passenger_name(&self) -> Option<String> {
        self.passengers.first().map(Passenger::full_name)
    }
}
