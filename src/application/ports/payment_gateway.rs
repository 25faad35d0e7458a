//! Payment Gateway Port - 支付网关抽象
//!
//! 具体实现在 infrastructure/adapters/payment

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::ExternalServiceError;
use crate::domain::payment::{Amount, PaymentId};
use crate::domain::CurrencyCode;

/// 创建支付意图参数
#[derive(Debug, Clone)]
pub struct PaymentIntentParams {
    pub amount: Amount,
    pub currency: CurrencyCode,
    pub user_id: Uuid,
    pub booking_id: Uuid,
}

/// Payment Gateway Port
///
/// 每次调用恰好发起一次外部请求，不做去重：
/// 同一个 paymentId 确认两次会向网关发两次请求，幂等性由网关负责
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    /// 确认支付意图，返回网关的原始 JSON
    async fn confirm_payment(&self, payment_id: &PaymentId) -> Result<Value, ExternalServiceError>;

    /// 创建支付意图，返回网关的原始 JSON
    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> Result<Value, ExternalServiceError>;
}
