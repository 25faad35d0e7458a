//! Flight Provider Port - 航班数据源抽象

use async_trait::async_trait;
use serde_json::Value;

use super::ExternalServiceError;
use crate::domain::flight::{FlightOffer, FlightOrderRequest, FlightSearchRequest};

/// Flight Provider Port
///
/// 返回值均为航班服务的原始 JSON，原样交给客户端
#[async_trait]
pub trait FlightProviderPort: Send + Sync {
    async fn search_flights(&self, request: &FlightSearchRequest) -> Result<Value, ExternalServiceError>;

    async fn price_flight_offers(&self, offers: &[FlightOffer]) -> Result<Value, ExternalServiceError>;

    async fn create_flight_order(&self, order: &FlightOrderRequest) -> Result<Value, ExternalServiceError>;
}
