//! HTTP Payment Gateway - 调用 Stripe 兼容的支付网关
//!
//! 实现 PaymentGatewayPort trait
//!
//! 外部支付 API:
//! POST {base}/v1/payment_intents/{id}/confirm   (form: return_url)
//! POST {base}/v1/payment_intents                (form: amount, currency, confirm=true, ...)
//! 认证: Bearer {secret_key}

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{ExternalServiceError, PaymentGatewayPort, PaymentIntentParams};
use crate::domain::payment::PaymentId;
use crate::infrastructure::adapters::provider_call::ProviderCall;

const CONFIRM_FALLBACK: &str = "Failed to confirm payment";
const CREATE_INTENT_FALLBACK: &str = "Failed to create payment intent";

/// 测试环境默认支付方式
const DEFAULT_PAYMENT_METHOD: &str = "pm_card_visa";

/// 支付网关客户端配置
#[derive(Debug, Clone)]
pub struct HttpPaymentGatewayConfig {
    /// 网关基础 URL
    pub base_url: String,
    /// 网关密钥
    pub secret_key: String,
    /// 确认支付时的回跳地址
    pub return_url: String,
    /// 请求超时
    pub timeout: Duration,
    /// 是否透传网关错误信息
    pub expose_provider_messages: bool,
}

impl Default for HttpPaymentGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.stripe.com".to_string(),
            secret_key: String::new(),
            return_url: "http://localhost:3000/payment-success".to_string(),
            timeout: Duration::from_secs(30),
            expose_provider_messages: true,
        }
    }
}

impl HttpPaymentGatewayConfig {
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            secret_key: secret_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP 支付网关客户端
pub struct HttpPaymentGateway {
    client: Client,
    config: HttpPaymentGatewayConfig,
}

impl HttpPaymentGateway {
    pub fn new(config: HttpPaymentGatewayConfig) -> Result<Self, ExternalServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExternalServiceError::transport("Failed to initialize payment client", e))?;

        Ok(Self { client, config })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn confirm_url(&self, payment_id: &PaymentId) -> String {
        format!("{}/v1/payment_intents/{}/confirm", self.base_url(), payment_id)
    }

    fn intents_url(&self) -> String {
        format!("{}/v1/payment_intents", self.base_url())
    }

    fn call(&self, operation: &'static str, fallback: &'static str) -> ProviderCall {
        ProviderCall::new(operation, fallback, self.config.timeout)
            .expose_provider_messages(self.config.expose_provider_messages)
    }
}

#[async_trait]
impl PaymentGatewayPort for HttpPaymentGateway {
    async fn confirm_payment(&self, payment_id: &PaymentId) -> Result<Value, ExternalServiceError> {
        tracing::debug!(url = %self.confirm_url(payment_id), "Confirming payment intent");

        let request = self
            .client
            .post(self.confirm_url(payment_id))
            .bearer_auth(&self.config.secret_key)
            .form(&[("return_url", self.config.return_url.as_str())]);

        self.call("confirm_payment", CONFIRM_FALLBACK)
            .send(request)
            .await
    }

    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> Result<Value, ExternalServiceError> {
        tracing::debug!(
            url = %self.intents_url(),
            amount = params.amount.minor_units(),
            currency = %params.currency,
            "Creating payment intent"
        );

        let form = [
            ("amount", params.amount.minor_units().to_string()),
            ("currency", params.currency.to_string()),
            ("payment_method", DEFAULT_PAYMENT_METHOD.to_string()),
            // 创建即确认
            ("confirm", "true".to_string()),
            ("return_url", self.config.return_url.clone()),
            ("metadata[userId]", params.user_id.to_string()),
            ("metadata[bookingId]", params.booking_id.to_string()),
        ];

        let request = self
            .client
            .post(self.intents_url())
            .bearer_auth(&self.config.secret_key)
            .form(&form);

        self.call("create_payment_intent", CREATE_INTENT_FALLBACK)
            .send(request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::Amount;
    use crate::domain::CurrencyCode;
    use crate::infrastructure::adapters::provider_call::mock_provider;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::post,
        Form, Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;
    use uuid::Uuid;

    async fn gateway(router: Router) -> HttpPaymentGateway {
        let base_url = mock_provider::spawn(router).await;
        HttpPaymentGateway::new(HttpPaymentGatewayConfig::new(base_url, "sk_test_123")).unwrap()
    }

    fn payment_id() -> PaymentId {
        PaymentId::new("pay_123").unwrap()
    }

    #[tokio::test]
    async fn test_confirm_success_returns_payload_unchanged() {
        let router = Router::new().route(
            "/v1/payment_intents/:id/confirm",
            post(
                |Path(id): Path<String>,
                 headers: HeaderMap,
                 Form(form): Form<HashMap<String, String>>| async move {
                    assert_eq!(id, "pay_123");
                    assert_eq!(headers["authorization"], "Bearer sk_test_123");
                    assert_eq!(form["return_url"], "http://localhost:3000/payment-success");
                    Json(json!({ "status": "confirmed" }))
                },
            ),
        );

        let result = gateway(router).await.confirm_payment(&payment_id()).await.unwrap();

        assert_eq!(result, json!({ "status": "confirmed" }));
    }

    #[tokio::test]
    async fn test_confirm_rejection_uses_provider_message_and_status() {
        let router = Router::new().route(
            "/v1/payment_intents/:id/confirm",
            post(|| async {
                (
                    StatusCode::PAYMENT_REQUIRED,
                    Json(json!({ "message": "card_declined" })),
                )
            }),
        );

        let err = gateway(router).await.confirm_payment(&payment_id()).await.unwrap_err();

        assert_eq!(err.to_string(), "card_declined");
        assert_eq!(err.status_code(), Some(402));
    }

    #[tokio::test]
    async fn test_confirm_rejection_without_message_uses_fallback() {
        let router = Router::new().route(
            "/v1/payment_intents/:id/confirm",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>").into_response() }),
        );

        let err = gateway(router).await.confirm_payment(&payment_id()).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to confirm payment");
        assert_eq!(err.status_code(), Some(502));
    }

    #[tokio::test]
    async fn test_provider_messages_can_be_hidden() {
        let router = Router::new().route(
            "/v1/payment_intents/:id/confirm",
            post(|| async {
                (
                    StatusCode::PAYMENT_REQUIRED,
                    Json(json!({ "error": { "message": "internal gateway detail" } })),
                )
            }),
        );
        let base_url = mock_provider::spawn(router).await;
        let mut config = HttpPaymentGatewayConfig::new(base_url, "sk_test_123");
        config.expose_provider_messages = false;
        let gateway = HttpPaymentGateway::new(config).unwrap();

        let err = gateway.confirm_payment(&payment_id()).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to confirm payment");
        assert_eq!(err.status_code(), Some(402));
    }

    #[tokio::test]
    async fn test_connection_refused_is_uniform_transport_error() {
        let base_url = mock_provider::unused_base_url().await;
        let gateway =
            HttpPaymentGateway::new(HttpPaymentGatewayConfig::new(base_url, "sk_test_123")).unwrap();

        let err = gateway.confirm_payment(&payment_id()).await.unwrap_err();

        assert!(matches!(err, ExternalServiceError::Transport { .. }));
        assert_eq!(err.to_string(), "Failed to confirm payment");
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_slow_gateway_times_out() {
        let router = Router::new().route(
            "/v1/payment_intents/:id/confirm",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let base_url = mock_provider::spawn(router).await;
        let config = HttpPaymentGatewayConfig::new(base_url, "sk_test_123")
            .with_timeout(Duration::from_millis(200));
        let gateway = HttpPaymentGateway::new(config).unwrap();

        let err = gateway.confirm_payment(&payment_id()).await.unwrap_err();

        assert!(matches!(err, ExternalServiceError::Timeout { .. }));
        assert_eq!(err.status_code(), Some(504));
    }

    #[tokio::test]
    async fn test_create_payment_intent_sends_form() {
        let user_id = Uuid::new_v4();
        let booking_id = Uuid::new_v4();
        let router = Router::new().route(
            "/v1/payment_intents",
            post(move |Form(form): Form<HashMap<String, String>>| async move {
                assert_eq!(form["amount"], "1000");
                assert_eq!(form["currency"], "usd");
                assert_eq!(form["payment_method"], "pm_card_visa");
                assert_eq!(form["confirm"], "true");
                assert_eq!(form["return_url"], "http://localhost:3000/payment-success");
                assert_eq!(form["metadata[userId]"], user_id.to_string());
                assert_eq!(form["metadata[bookingId]"], booking_id.to_string());
                Json(json!({ "id": "pi_1", "status": "succeeded" }))
            }),
        );

        let params = PaymentIntentParams {
            amount: Amount::new(1000).unwrap(),
            currency: CurrencyCode::new("usd").unwrap(),
            user_id,
            booking_id,
        };
        let result = gateway(router).await.create_payment_intent(&params).await.unwrap();

        assert_eq!(result["id"], "pi_1");
        assert_eq!(result["status"], "succeeded");
    }
}
