//! Flight Context - Request Schemas
//!
//! 航班搜索、询价、下单的请求结构。
//! 值对象在反序列化时完成字段级校验，`validate()` 负责跨字段约束。
//! 航班报价（flight offer）结构庞大且由 Amadeus 定义，
//! 只对关键字段建模，其余字段通过 `extra` 原样透传。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

use super::value_objects::{
    Cabin, CarrierCode, Coverage, FareOption, FlightOfferKind, Gender, IataCode, OrderKind,
    PricingKind, TravelDate, TravelTime, TravelerType,
};
use crate::domain::{CurrencyCode, DomainError, EmailAddress};

// ============================================================================
// Flight Search
// ============================================================================

/// 航班搜索请求（POST /v2/shopping/flight-offers）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchRequest {
    pub currency_code: CurrencyCode,
    pub origin_destinations: Vec<OriginDestination>,
    pub travelers: Vec<SearchTraveler>,
    pub sources: Vec<String>,
    pub search_criteria: SearchCriteria,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginDestination {
    pub id: String,
    pub origin_location_code: IataCode,
    pub destination_location_code: IataCode,
    pub departure_date_time_range: DepartureDateTimeRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartureDateTimeRange {
    pub date: TravelDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TravelTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTraveler {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveler_type: Option<TravelerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare_options: Option<Vec<FareOption>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub max_flight_offers: u32,
    pub flight_filters: FlightFilters,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabin_restrictions: Option<Vec<CabinRestriction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_restrictions: Option<CarrierRestrictions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabin: Option<Cabin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Coverage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_destination_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierRestrictions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_carrier_codes: Option<Vec<CarrierCode>>,
}

impl FlightSearchRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.origin_destinations.is_empty() {
            return Err(DomainError::empty("originDestinations"));
        }
        if self.travelers.is_empty() {
            return Err(DomainError::empty("travelers"));
        }
        if self.search_criteria.max_flight_offers == 0 {
            return Err(DomainError::invalid_request(
                "maxFlightOffers must be a positive integer",
            ));
        }

        let leg_ids = unique_ids(
            self.origin_destinations.iter().map(|od| od.id.as_str()),
            "originDestinations",
        )?;
        unique_ids(self.travelers.iter().map(|t| t.id.as_str()), "travelers")?;

        // 舱位限制引用的行程段必须存在
        let restrictions = self
            .search_criteria
            .flight_filters
            .cabin_restrictions
            .iter()
            .flatten();
        for restriction in restrictions {
            for id in restriction.origin_destination_ids.iter().flatten() {
                if !leg_ids.contains(id.as_str()) {
                    return Err(DomainError::invalid_request(format!(
                        "cabinRestrictions references unknown originDestination id: {}",
                        id
                    )));
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Flight Offer
// ============================================================================

/// 航班报价，关键字段强类型，其余原样透传
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    #[serde(rename = "type")]
    pub kind: FlightOfferKind,
    pub id: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validating_airline_codes: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Flight Pricing
// ============================================================================

/// 航班询价请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPricingRequest {
    pub data: PricingData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingData {
    #[serde(rename = "type")]
    pub kind: PricingKind,
    pub flight_offers: Vec<FlightOffer>,
}

impl FlightPricingRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.data.flight_offers.is_empty() {
            return Err(DomainError::empty("flightOffers"));
        }
        Ok(())
    }

    pub fn into_offers(self) -> Vec<FlightOffer> {
        self.data.flight_offers
    }
}

// ============================================================================
// Flight Order
// ============================================================================

/// 航班下单请求（POST /v1/booking/flight-orders）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOrderRequest {
    pub data: FlightOrderData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOrderData {
    #[serde(rename = "type")]
    pub kind: OrderKind,
    pub flight_offers: Vec<FlightOffer>,
    pub travelers: Vec<OrderTraveler>,
    /// remarks / ticketingAgreement / contacts
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTraveler {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<TravelDate>,
    pub name: TravelerName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub contact: TravelerContact,
    /// documents 等
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerContact {
    pub email_address: EmailAddress,
    /// phones 等
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlightOrderRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        let data = &self.data;
        if data.flight_offers.is_empty() {
            return Err(DomainError::empty("flightOffers"));
        }
        if data.travelers.is_empty() {
            return Err(DomainError::empty("travelers"));
        }

        for offer in &data.flight_offers {
            if offer.validating_airline_codes.is_empty() {
                return Err(DomainError::invalid_request(format!(
                    "flight offer {} has no validatingAirlineCodes",
                    offer.id
                )));
            }
        }

        unique_ids(data.travelers.iter().map(|t| t.id.as_str()), "travelers")?;

        for traveler in &data.travelers {
            if traveler.name.first_name.trim().is_empty() || traveler.name.last_name.trim().is_empty() {
                return Err(DomainError::invalid_request(format!(
                    "traveler {} must have a first and last name",
                    traveler.id
                )));
            }
        }

        Ok(())
    }
}

/// 校验 ID 唯一，返回 ID 集合
fn unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<HashSet<&'a str>, DomainError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::invalid_request(format!(
                "{} contains duplicate id: {}",
                field, id
            )));
        }
    }
    Ok(seen)
}
