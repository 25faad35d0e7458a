//! Payment HTTP Handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{ConfirmPayment, CreatePaymentIntent};
use crate::domain::payment::{Amount, PaymentId};
use crate::domain::CurrencyCode;
use crate::infrastructure::http::dto::ApiJson;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    /// 缺失与空字符串统一按 "Payment ID is required" 处理
    #[serde(default)]
    pub payment_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    pub amount: Amount,
    pub currency: CurrencyCode,
    pub user_id: Uuid,
    pub booking_id: Uuid,
}

// ============================================================================
// Handlers
// ============================================================================

/// 确认支付
///
/// POST /api/payments/confirm
pub async fn confirm_payment(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ConfirmPaymentRequest>,
) -> Result<Json<Value>, ApiError> {
    let payment_id = PaymentId::new(req.payment_id)?;

    let result = state
        .confirm_payment_handler
        .handle(ConfirmPayment { payment_id })
        .await?;

    Ok(Json(result))
}

/// 创建支付意图
///
/// POST /api/payments/create-intent
pub async fn create_payment_intent(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreatePaymentIntentRequest>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .create_payment_intent_handler
        .handle(CreatePaymentIntent {
            amount: req.amount,
            currency: req.currency,
            user_id: req.user_id,
            booking_id: req.booking_id,
        })
        .await?;

    Ok(Json(result))
}
