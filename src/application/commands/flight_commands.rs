//! Flight Commands

use crate::domain::flight::{FlightOrderRequest, FlightPricingRequest, FlightSearchRequest};

/// 搜索航班命令
#[derive(Debug, Clone)]
pub struct SearchFlights {
    pub request: FlightSearchRequest,
}

/// 航班询价命令
#[derive(Debug, Clone)]
pub struct PriceFlightOffers {
    pub request: FlightPricingRequest,
}

/// 航班下单命令
#[derive(Debug, Clone)]
pub struct CreateFlightOrder {
    pub request: FlightOrderRequest,
}
