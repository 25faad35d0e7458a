//! Email Sender Port - 邮件发送抽象

use async_trait::async_trait;

use super::ExternalServiceError;
use crate::domain::booking::BookingReference;
use crate::domain::EmailAddress;

/// 邮件模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailTemplate {
    /// 预订确认
    BookingConfirmation {
        to: EmailAddress,
        booking_reference: BookingReference,
        passenger_name: String,
    },
}

impl EmailTemplate {
    pub fn recipient(&self) -> &EmailAddress {
        match self {
            Self::BookingConfirmation { to, .. } => to,
        }
    }
}

/// 发送结果
#[derive(Debug, Clone, Default)]
pub struct SentEmail {
    /// SMTP 服务器返回的消息标识（若有）
    pub message_id: Option<String>,
}

/// Email Sender Port
#[async_trait]
pub trait EmailSenderPort: Send + Sync {
    async fn send(&self, template: EmailTemplate) -> Result<SentEmail, ExternalServiceError>;
}
