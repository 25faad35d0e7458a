//! Payment Command Handlers

use serde_json::Value;
use std::sync::Arc;

use crate::application::commands::{ConfirmPayment, CreatePaymentIntent};
use crate::application::error::ApplicationError;
use crate::application::ports::{PaymentGatewayPort, PaymentIntentParams};

// ============================================================================
// ConfirmPayment
// ============================================================================

/// ConfirmPayment Handler
///
/// 不做去重，重复确认由网关判定
pub struct ConfirmPaymentHandler {
    gateway: Arc<dyn PaymentGatewayPort>,
}

impl ConfirmPaymentHandler {
    pub fn new(gateway: Arc<dyn PaymentGatewayPort>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: ConfirmPayment) -> Result<Value, ApplicationError> {
        let result = self.gateway.confirm_payment(&command.payment_id).await?;

        tracing::info!(payment_id = %command.payment_id, "Payment intent confirmed");

        Ok(result)
    }
}

// ============================================================================
// CreatePaymentIntent
// ============================================================================

/// CreatePaymentIntent Handler
pub struct CreatePaymentIntentHandler {
    gateway: Arc<dyn PaymentGatewayPort>,
}

impl CreatePaymentIntentHandler {
    pub fn new(gateway: Arc<dyn PaymentGatewayPort>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: CreatePaymentIntent) -> Result<Value, ApplicationError> {
        let params = PaymentIntentParams {
            amount: command.amount,
            currency: command.currency,
            user_id: command.user_id,
            booking_id: command.booking_id,
        };

        let result = self.gateway.create_payment_intent(&params).await?;

        tracing::info!(
            booking_id = %params.booking_id,
            amount = params.amount.minor_units(),
            currency = %params.currency,
            "Payment intent created"
        );

        Ok(result)
    }
}
