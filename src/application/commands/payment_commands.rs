//! Payment Commands

use uuid::Uuid;

use crate::domain::payment::{Amount, PaymentId};
use crate::domain::CurrencyCode;

/// 确认支付命令
#[derive(Debug, Clone)]
pub struct ConfirmPayment {
    pub payment_id: PaymentId,
}

/// 创建支付意图命令
#[derive(Debug, Clone)]
pub struct CreatePaymentIntent {
    pub amount: Amount,
    pub currency: CurrencyCode,
    pub user_id: Uuid,
    pub booking_id: Uuid,
}
