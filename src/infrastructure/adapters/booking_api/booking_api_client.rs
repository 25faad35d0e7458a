//! Booking API Client - 调用本服务 /api 接口的客户端
//!
//! 供 App 侧调用：
//! POST {base}/api/flights/search          → 航班报价列表（响应中的 data）
//! POST {base}/api/flights/price           → 询价结果
//! POST {base}/api/flights/book            → 订单
//! POST {base}/api/payments/create-intent  → 支付意图
//! POST {base}/api/payments/confirm        { "paymentId": "..." }
//!
//! 错误规则与其他适配器一致：非 2xx 时优先使用响应体中的 message，
//! 否则使用各操作的固定回退信息。

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

use crate::application::ports::ExternalServiceError;
use crate::config::ApiClientConfig;
use crate::domain::flight::{FlightOrderRequest, FlightPricingRequest, FlightSearchRequest};
use crate::domain::payment::{Amount, PaymentId};
use crate::domain::CurrencyCode;
use crate::infrastructure::adapters::provider_call::ProviderCall;

const SEARCH_FALLBACK: &str = "Failed to search flights";
const PRICING_FALLBACK: &str = "Failed to get flight pricing";
const BOOKING_FALLBACK: &str = "Failed to book flight";
const CREATE_INTENT_FALLBACK: &str = "Failed to create payment intent";
const CONFIRM_FALLBACK: &str = "Failed to confirm payment";

/// 确认支付参数
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentParams {
    pub payment_id: PaymentId,
}

/// 创建支付意图参数
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentParams {
    pub amount: Amount,
    pub currency: CurrencyCode,
    pub user_id: Uuid,
    pub booking_id: Uuid,
}

/// 客户端配置
#[derive(Debug, Clone)]
pub struct BookingApiClientConfig {
    /// 服务基础 URL，例如 http://localhost:2000
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BookingApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:2000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<&ApiClientConfig> for BookingApiClientConfig {
    fn from(config: &ApiClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Booking API 客户端
pub struct BookingApiClient {
    client: Client,
    config: BookingApiClientConfig,
}

impl BookingApiClient {
    pub fn new(config: BookingApiClientConfig) -> Result<Self, ExternalServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExternalServiceError::transport("Failed to initialize booking API client", e))?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        operation: &'static str,
        fallback: &'static str,
    ) -> Result<Value, ExternalServiceError> {
        let url = format!("{}{}", self.base_url(), path);
        tracing::debug!(url = %url, operation, "Calling booking API");

        let request = self.client.post(url).json(body);

        ProviderCall::new(operation, fallback, self.config.timeout)
            .send(request)
            .await
    }

    /// 搜索航班，返回报价列表；响应缺少 data 时为空列表
    pub async fn search_flights(
        &self,
        params: &FlightSearchRequest,
    ) -> Result<Value, ExternalServiceError> {
        let mut result = self
            .post_json("/api/flights/search", params, "search_flights", SEARCH_FALLBACK)
            .await?;

        Ok(match result.get_mut("data").map(Value::take) {
            Some(Value::Null) | None => Value::Array(Vec::new()),
            Some(offers) => offers,
        })
    }

    /// 航班询价
    pub async fn price_flights(
        &self,
        params: &FlightPricingRequest,
    ) -> Result<Value, ExternalServiceError> {
        self.post_json("/api/flights/price", params, "price_flights", PRICING_FALLBACK)
            .await
    }

    /// 航班下单
    pub async fn book_flight(
        &self,
        params: &FlightOrderRequest,
    ) -> Result<Value, ExternalServiceError> {
        self.post_json("/api/flights/book", params, "book_flight", BOOKING_FALLBACK)
            .await
    }

    /// 创建支付意图
    pub async fn create_payment_intent(
        &self,
        params: &CreatePaymentIntentParams,
    ) -> Result<Value, ExternalServiceError> {
        self.post_json(
            "/api/payments/create-intent",
            params,
            "create_payment_intent",
            CREATE_INTENT_FALLBACK,
        )
        .await
    }

    /// 确认支付，成功时返回服务端 JSON
    pub async fn confirm_payment(
        &self,
        params: &ConfirmPaymentParams,
    ) -> Result<Value, ExternalServiceError> {
        self.post_json("/api/payments/confirm", params, "confirm_payment", CONFIRM_FALLBACK)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::provider_call::mock_provider;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    fn search_request() -> FlightSearchRequest {
        serde_json::from_value(json!({
            "currencyCode": "EUR",
            "originDestinations": [{
                "id": "1",
                "originLocationCode": "MAD",
                "destinationLocationCode": "JFK",
                "departureDateTimeRange": { "date": "2025-06-01" }
            }],
            "travelers": [{ "id": "1", "travelerType": "ADULT" }],
            "sources": ["GDS"],
            "searchCriteria": { "maxFlightOffers": 2, "flightFilters": {} }
        }))
        .unwrap()
    }

    fn offer() -> Value {
        json!({
            "type": "flight-offer",
            "id": "1",
            "source": "GDS",
            "validatingAirlineCodes": ["IB"]
        })
    }

    async fn client(router: Router) -> BookingApiClient {
        let base_url = mock_provider::spawn(router).await;
        BookingApiClient::new(BookingApiClientConfig {
            base_url,
            ..Default::default()
        })
        .unwrap()
    }

    fn params() -> ConfirmPaymentParams {
        ConfirmPaymentParams {
            payment_id: PaymentId::new("pay_123").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_confirm_payment_success() {
        let router = Router::new().route(
            "/api/payments/confirm",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "paymentId": "pay_123" }));
                Json(json!({ "status": "confirmed" }))
            }),
        );

        let result = client(router).await.confirm_payment(&params()).await.unwrap();

        assert_eq!(result, json!({ "status": "confirmed" }));
    }

    #[tokio::test]
    async fn test_confirm_payment_declined() {
        let router = Router::new().route(
            "/api/payments/confirm",
            post(|| async {
                (
                    StatusCode::PAYMENT_REQUIRED,
                    Json(json!({ "message": "card_declined" })),
                )
            }),
        );

        let err = client(router).await.confirm_payment(&params()).await.unwrap_err();

        assert_eq!(err.to_string(), "card_declined");
        assert_eq!(err.status_code(), Some(402));
    }

    #[test]
    fn test_config_from_app_config() {
        let config = BookingApiClientConfig::from(&ApiClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:2000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_confirm_payment_server_unreachable() {
        let client = BookingApiClient::new(BookingApiClientConfig {
            base_url: mock_provider::unused_base_url().await,
            ..Default::default()
        })
        .unwrap();

        let err = client.confirm_payment(&params()).await.unwrap_err();

        assert!(matches!(err, ExternalServiceError::Transport { .. }));
        assert_eq!(err.to_string(), "Failed to confirm payment");
    }

    #[tokio::test]
    async fn test_search_flights_returns_offer_list() {
        let router = Router::new().route(
            "/api/flights/search",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["originDestinations"][0]["originLocationCode"], "MAD");
                Json(json!({ "meta": { "count": 1 }, "data": [{ "id": "1" }] }))
            }),
        );

        let offers = client(router).await.search_flights(&search_request()).await.unwrap();

        assert_eq!(offers, json!([{ "id": "1" }]));
    }

    #[tokio::test]
    async fn test_search_flights_without_data_is_empty() {
        let router = Router::new().route(
            "/api/flights/search",
            post(|| async { Json(json!({ "meta": { "count": 0 } })) }),
        );

        let offers = client(router).await.search_flights(&search_request()).await.unwrap();

        assert_eq!(offers, json!([]));
    }

    #[tokio::test]
    async fn test_search_flights_failure_uses_fallback() {
        let router = Router::new().route(
            "/api/flights/search",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );

        let err = client(router).await.search_flights(&search_request()).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to search flights");
        assert_eq!(err.status_code(), Some(502));
    }

    #[tokio::test]
    async fn test_price_flights() {
        let router = Router::new().route(
            "/api/flights/price",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["data"]["type"], "flight-offers-pricing");
                Json(json!({ "data": { "type": "flight-offers-pricing", "flightOffers": [] } }))
            }),
        );
        let request: FlightPricingRequest = serde_json::from_value(json!({
            "data": { "type": "flight-offers-pricing", "flightOffers": [offer()] }
        }))
        .unwrap();

        let result = client(router).await.price_flights(&request).await.unwrap();

        assert_eq!(result["data"]["type"], "flight-offers-pricing");
    }

    #[tokio::test]
    async fn test_price_flights_failure_uses_fallback() {
        let router = Router::new().route(
            "/api/flights/price",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let request: FlightPricingRequest = serde_json::from_value(json!({
            "data": { "type": "flight-offers-pricing", "flightOffers": [offer()] }
        }))
        .unwrap();

        let err = client(router).await.price_flights(&request).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to get flight pricing");
    }

    fn order_request() -> FlightOrderRequest {
        serde_json::from_value(json!({
            "data": {
                "type": "flight-order",
                "flightOffers": [offer()],
                "travelers": [{
                    "id": "1",
                    "name": { "firstName": "JANE", "lastName": "DOE" },
                    "contact": { "emailAddress": "jane@example.com" }
                }]
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_book_flight() {
        let router = Router::new().route(
            "/api/flights/book",
            post(|| async {
                (
                    StatusCode::CREATED,
                    Json(json!({ "data": { "type": "flight-order", "id": "ORDER1" } })),
                )
            }),
        );

        let result = client(router).await.book_flight(&order_request()).await.unwrap();

        assert_eq!(result["data"]["id"], "ORDER1");
    }

    #[tokio::test]
    async fn test_book_flight_forwards_server_message() {
        let router = Router::new().route(
            "/api/flights/book",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": "SEGMENT SELL FAILURE", "statusCode": 400 })),
                )
            }),
        );

        let err = client(router).await.book_flight(&order_request()).await.unwrap_err();

        assert_eq!(err.to_string(), "SEGMENT SELL FAILURE");
        assert_eq!(err.status_code(), Some(400));
    }

    #[tokio::test]
    async fn test_book_flight_failure_uses_fallback() {
        let router = Router::new().route(
            "/api/flights/book",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
        );

        let err = client(router).await.book_flight(&order_request()).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to book flight");
    }

    fn intent_params() -> CreatePaymentIntentParams {
        CreatePaymentIntentParams {
            amount: Amount::new(1000).unwrap(),
            currency: CurrencyCode::new("usd").unwrap(),
            user_id: Uuid::nil(),
            booking_id: Uuid::nil(),
        }
    }

    #[tokio::test]
    async fn test_create_payment_intent() {
        let router = Router::new().route(
            "/api/payments/create-intent",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["amount"], 1000);
                assert_eq!(body["currency"], "usd");
                assert_eq!(body["userId"], Uuid::nil().to_string());
                assert_eq!(body["bookingId"], Uuid::nil().to_string());
                Json(json!({ "id": "pi_1", "clientSecret": "pi_1_secret" }))
            }),
        );

        let result = client(router).await.create_payment_intent(&intent_params()).await.unwrap();

        assert_eq!(result["clientSecret"], "pi_1_secret");
    }

    #[tokio::test]
    async fn test_create_payment_intent_failure_uses_fallback() {
        let router = Router::new().route(
            "/api/payments/create-intent",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "") }),
        );

        let err = client(router).await.create_payment_intent(&intent_params()).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to create payment intent");
        assert_eq!(err.status_code(), Some(503));
    }
}
