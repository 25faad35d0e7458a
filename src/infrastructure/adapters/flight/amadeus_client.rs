//! Amadeus Client - 调用 Amadeus Self-Service API
//!
//! 实现 FlightProviderPort trait
//!
//! 外部 API:
//! POST /v1/security/oauth2/token           client_credentials 获取访问令牌
//! POST /v2/shopping/flight-offers          航班搜索
//! POST /v1/shopping/flight-offers/pricing  航班询价
//! POST /v1/booking/flight-orders           航班下单
//!
//! 访问令牌缓存在内存中，在过期前 60 秒刷新

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::application::ports::{ExternalServiceError, FlightProviderPort};
use crate::domain::flight::{FlightOffer, FlightOrderRequest, FlightSearchRequest};
use crate::infrastructure::adapters::provider_call::ProviderCall;

const AUTH_FALLBACK: &str = "Failed to authenticate with Amadeus";
const SEARCH_FALLBACK: &str = "Failed to search flights";
const PRICING_FALLBACK: &str = "Failed to price flight offers";
const ORDER_FALLBACK: &str = "Failed to create flight order";

/// 令牌提前刷新的余量（秒）
const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;

/// Amadeus 客户端配置
#[derive(Debug, Clone)]
pub struct AmadeusClientConfig {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// 请求超时
    pub timeout: Duration,
    /// 是否透传 Amadeus 错误信息
    pub expose_provider_messages: bool,
}

impl Default for AmadeusClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://test.api.amadeus.com".to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            timeout: Duration::from_secs(30),
            expose_provider_messages: true,
        }
    }
}

impl AmadeusClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// OAuth 令牌响应
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// 缓存的访问令牌
#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    refresh_at: Instant,
}

/// Amadeus HTTP 客户端
pub struct AmadeusClient {
    client: Client,
    config: AmadeusClientConfig,
    token: Mutex<Option<AccessToken>>,
}

impl AmadeusClient {
    pub fn new(config: AmadeusClientConfig) -> Result<Self, ExternalServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExternalServiceError::transport("Failed to initialize Amadeus client", e))?;

        Ok(Self {
            client,
            config,
            token: Mutex::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn call(&self, operation: &'static str, fallback: &'static str) -> ProviderCall {
        ProviderCall::new(operation, fallback, self.config.timeout)
            .expose_provider_messages(self.config.expose_provider_messages)
    }

    /// 获取有效的访问令牌，必要时刷新
    ///
    /// 持锁期间完成刷新，并发请求只会触发一次令牌请求
    async fn access_token(&self) -> Result<String, ExternalServiceError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        let call = self.call("authenticate", AUTH_FALLBACK);
        let request = self.client.post(self.url("/v1/security/oauth2/token")).form(&[
            ("grant_type", "client_credentials"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ]);

        let body = call.send(request).await?;
        let response: TokenResponse = serde_json::from_value(body)
            .map_err(|e| ExternalServiceError::invalid_response(AUTH_FALLBACK, e))?;

        let ttl = response.expires_in.saturating_sub(TOKEN_EXPIRY_MARGIN_SECS);
        *cached = Some(AccessToken {
            value: response.access_token.clone(),
            refresh_at: Instant::now() + Duration::from_secs(ttl),
        });

        tracing::info!(expires_in = response.expires_in, "Amadeus authentication successful");

        Ok(response.access_token)
    }

    /// 携带访问令牌发送 JSON 请求
    async fn authorized_post(
        &self,
        path: &str,
        body: &Value,
        call: ProviderCall,
    ) -> Result<Value, ExternalServiceError> {
        // 鉴权失败以其自身的错误返回，不会被改写为当前操作的回退信息
        let token = self.access_token().await?;

        tracing::debug!(url = %self.url(path), operation = call.operation, "Sending Amadeus request");

        let request = self.client.post(self.url(path)).bearer_auth(token).json(body);
        call.send(request).await
    }
}

#[async_trait]
impl FlightProviderPort for AmadeusClient {
    async fn search_flights(&self, request: &FlightSearchRequest) -> Result<Value, ExternalServiceError> {
        let body = serde_json::to_value(request)
            .map_err(|e| ExternalServiceError::invalid_response(SEARCH_FALLBACK, e))?;

        self.authorized_post(
            "/v2/shopping/flight-offers",
            &body,
            self.call("search_flights", SEARCH_FALLBACK),
        )
        .await
    }

    async fn price_flight_offers(&self, offers: &[FlightOffer]) -> Result<Value, ExternalServiceError> {
        let body = json!({
            "data": {
                "type": "flight-offers-pricing",
                "flightOffers": offers,
            }
        });

        self.authorized_post(
            "/v1/shopping/flight-offers/pricing",
            &body,
            self.call("price_flight_offers", PRICING_FALLBACK),
        )
        .await
    }

    async fn create_flight_order(&self, order: &FlightOrderRequest) -> Result<Value, ExternalServiceError> {
        let body = serde_json::to_value(order)
            .map_err(|e| ExternalServiceError::invalid_response(ORDER_FALLBACK, e))?;

        self.authorized_post(
            "/v1/booking/flight-orders",
            &body,
            self.call("create_flight_order", ORDER_FALLBACK),
        )
        .await
    }
}
