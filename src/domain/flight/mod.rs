//! Flight Context - 航班限界上下文
//!
//! 职责:
//! - 航班搜索 / 询价 / 下单请求结构
//! - 机场、航司、日期等值对象校验

mod requests;
mod value_objects;

pub use requests::{
    CabinRestriction, CarrierRestrictions, DepartureDateTimeRange, FlightFilters, FlightOffer,
    FlightOrderData, FlightOrderRequest, FlightPricingRequest, FlightSearchRequest,
    OrderTraveler, OriginDestination, PricingData, SearchCriteria, SearchTraveler,
    TravelerContact, TravelerName,
};
pub use value_objects::{
    Cabin, CarrierCode, Coverage, FareOption, FlightOfferKind, Gender, IataCode, OrderKind,
    PricingKind, TravelDate, TravelTime, TravelerType,
};
