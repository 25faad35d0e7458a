//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PaymentGateway、FlightProvider、EmailSender）
//! - commands: 命令及处理器，每个命令先校验再调用一次外部服务
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    ConfirmPayment, CreateFlightOrder, CreatePaymentIntent, PriceFlightOffers, SearchFlights,
    SendBookingConfirmation,
    handlers::{
        BookingConfirmationSent, ConfirmPaymentHandler, CreateFlightOrderHandler,
        CreatePaymentIntentHandler, PriceFlightOffersHandler, SearchFlightsHandler,
        SendBookingConfirmationHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    EmailSenderPort, EmailTemplate, ExternalServiceError, FlightProviderPort,
    PaymentGatewayPort, PaymentIntentParams, SentEmail,
};
