//! Flight Command Handlers

use serde_json::Value;
use std::sync::Arc;

use crate::application::commands::{CreateFlightOrder, PriceFlightOffers, SearchFlights};
use crate::application::error::ApplicationError;
use crate::application::ports::FlightProviderPort;

// ============================================================================
// SearchFlights
// ============================================================================

/// SearchFlights Handler
pub struct SearchFlightsHandler {
    provider: Arc<dyn FlightProviderPort>,
}

impl SearchFlightsHandler {
    pub fn new(provider: Arc<dyn FlightProviderPort>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, command: SearchFlights) -> Result<Value, ApplicationError> {
        command.request.validate()?;

        let result = self.provider.search_flights(&command.request).await?;

        tracing::info!(
            legs = command.request.origin_destinations.len(),
            travelers = command.request.travelers.len(),
            "Flight search completed"
        );

        Ok(result)
    }
}

// ============================================================================
// PriceFlightOffers
// ============================================================================

/// PriceFlightOffers Handler
pub struct PriceFlightOffersHandler {
    provider: Arc<dyn FlightProviderPort>,
}

impl PriceFlightOffersHandler {
    pub fn new(provider: Arc<dyn FlightProviderPort>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, command: PriceFlightOffers) -> Result<Value, ApplicationError> {
        command.request.validate()?;

        let offers = command.request.into_offers();
        let result = self.provider.price_flight_offers(&offers).await?;

        tracing::info!(offers = offers.len(), "Flight offers priced");

        Ok(result)
    }
}

// ============================================================================
// CreateFlightOrder
// ============================================================================

/// CreateFlightOrder Handler
pub struct CreateFlightOrderHandler {
    provider: Arc<dyn FlightProviderPort>,
}

impl CreateFlightOrderHandler {
    pub fn new(provider: Arc<dyn FlightProviderPort>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, command: CreateFlightOrder) -> Result<Value, ApplicationError> {
        command.request.validate()?;

        let result = self.provider.create_flight_order(&command.request).await?;
        let order_id = result
            .pointer("/data/id")
            .and_then(Value::as_str)
            .unwrap_or("unknown");

        tracing::info!(
            travelers = command.request.data.travelers.len(),
            order_id,
            "Flight order created"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::fakes::FakeFlightProvider;
    use crate::domain::flight::{FlightOrderRequest, FlightPricingRequest};
    use serde_json::json;

    #[tokio::test]
    async fn test_invalid_request_never_reaches_provider() {
        let provider = Arc::new(FakeFlightProvider::new(Ok(json!({}))));
        let handler = PriceFlightOffersHandler::new(provider.clone());

        let request: FlightPricingRequest = serde_json::from_value(json!({
            "data": { "type": "flight-offers-pricing", "flightOffers": [] }
        }))
        .unwrap();

        let err = handler.handle(PriceFlightOffers { request }).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert!(provider.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_pricing_forwards_offers() {
        let provider = Arc::new(FakeFlightProvider::new(Ok(json!({ "data": { "type": "flight-offers-pricing" } }))));
        let handler = PriceFlightOffersHandler::new(provider.clone());

        let request: FlightPricingRequest = serde_json::from_value(json!({
            "data": {
                "type": "flight-offers-pricing",
                "flightOffers": [{ "type": "flight-offer", "id": "1", "source": "GDS" }]
            }
        }))
        .unwrap();

        let result = handler.handle(PriceFlightOffers { request }).await.unwrap();

        assert_eq!(result["data"]["type"], "flight-offers-pricing");
        assert_eq!(*provider.calls.lock().unwrap(), vec!["price"]);
    }

    #[tokio::test]
    async fn test_order_returns_provider_payload() {
        let provider = Arc::new(FakeFlightProvider::new(Ok(json!({
            "data": { "type": "flight-order", "id": "eJzTd9f3NjIJdzUGAAp%2fAiY=" }
        }))));
        let handler = CreateFlightOrderHandler::new(provider.clone());

        let request: FlightOrderRequest = serde_json::from_value(json!({
            "data": {
                "type": "flight-order",
                "flightOffers": [{
                    "type": "flight-offer",
                    "id": "1",
                    "source": "GDS",
                    "validatingAirlineCodes": ["IB"]
                }],
                "travelers": [{
                    "id": "1",
                    "name": { "firstName": "JANE", "lastName": "DOE" },
                    "contact": { "emailAddress": "jane@example.com" }
                }]
            }
        }))
        .unwrap();

        let result = handler.handle(CreateFlightOrder { request }).await.unwrap();

        assert_eq!(result["data"]["id"], "eJzTd9f3NjIJdzUGAAp%2fAiY=");
        assert_eq!(*provider.calls.lock().unwrap(), vec!["order"]);
    }

    #[tokio::test]
    async fn test_order_without_id_still_succeeds() {
        let provider = Arc::new(FakeFlightProvider::new(Ok(json!({ "warnings": [] }))));
        let handler = CreateFlightOrderHandler::new(provider);

        let request: FlightOrderRequest = serde_json::from_value(json!({
            "data": {
                "type": "flight-order",
                "flightOffers": [{
                    "type": "flight-offer",
                    "id": "1",
                    "source": "GDS",
                    "validatingAirlineCodes": ["IB"]
                }],
                "travelers": [{
                    "id": "1",
                    "name": { "firstName": "JANE", "lastName": "DOE" },
                    "contact": { "emailAddress": "jane@example.com" }
                }]
            }
        }))
        .unwrap();

        let result = handler.handle(CreateFlightOrder { request }).await.unwrap();

        assert_eq!(result, json!({ "warnings": [] }));
    }
}
