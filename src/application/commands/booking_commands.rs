//! Booking Commands

use crate::domain::booking::BookingConfirmationRequest;

/// 发送预订确认邮件命令
#[derive(Debug, Clone)]
pub struct SendBookingConfirmation {
    pub request: BookingConfirmationRequest,
}
