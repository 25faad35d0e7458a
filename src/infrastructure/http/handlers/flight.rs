//! Flight HTTP Handlers
//!
//! 请求体直接反序列化为领域请求结构，响应为 Amadeus 原始 JSON

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{CreateFlightOrder, PriceFlightOffers, SearchFlights};
use crate::domain::flight::{FlightOrderRequest, FlightPricingRequest, FlightSearchRequest};
use crate::infrastructure::http::dto::ApiJson;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 搜索航班
///
/// POST /api/flights/search
pub async fn search_flights(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<FlightSearchRequest>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .search_flights_handler
        .handle(SearchFlights { request })
        .await?;

    Ok(Json(result))
}

/// 航班询价
///
/// POST /api/flights/price
pub async fn price_flights(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<FlightPricingRequest>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .price_flight_offers_handler
        .handle(PriceFlightOffers { request })
        .await?;

    Ok(Json(result))
}

/// 航班下单，成功返回 201
///
/// POST /api/flights/book
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<FlightOrderRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let result = state
        .create_flight_order_handler
        .handle(CreateFlightOrder { request })
        .await?;

    Ok((StatusCode::CREATED, Json(result)))
}
