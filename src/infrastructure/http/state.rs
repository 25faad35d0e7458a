//! Application State
//!
//! 持有所有 Command Handlers，路由之间只读共享

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ConfirmPaymentHandler, CreateFlightOrderHandler, CreatePaymentIntentHandler,
    PriceFlightOffersHandler, SearchFlightsHandler, SendBookingConfirmationHandler,
    // Ports
    EmailSenderPort, FlightProviderPort, PaymentGatewayPort,
};

/// 应用状态
pub struct AppState {
    // ========== Payment ==========
    pub confirm_payment_handler: ConfirmPaymentHandler,
    pub create_payment_intent_handler: CreatePaymentIntentHandler,

    // ========== Flight ==========
    pub search_flights_handler: SearchFlightsHandler,
    pub price_flight_offers_handler: PriceFlightOffersHandler,
    pub create_flight_order_handler: CreateFlightOrderHandler,

    // ========== Booking ==========
    pub send_booking_confirmation_handler: SendBookingConfirmationHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        payment_gateway: Arc<dyn PaymentGatewayPort>,
        flight_provider: Arc<dyn FlightProviderPort>,
        email_sender: Arc<dyn EmailSenderPort>,
    ) -> Self {
        Self {
            confirm_payment_handler: ConfirmPaymentHandler::new(payment_gateway.clone()),
            create_payment_intent_handler: CreatePaymentIntentHandler::new(payment_gateway),

            search_flights_handler: SearchFlightsHandler::new(flight_provider.clone()),
            price_flight_offers_handler: PriceFlightOffersHandler::new(flight_provider.clone()),
            create_flight_order_handler: CreateFlightOrderHandler::new(flight_provider),

            send_booking_confirmation_handler: SendBookingConfirmationHandler::new(email_sender),
        }
    }
}
