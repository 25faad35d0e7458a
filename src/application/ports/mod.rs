//! Application Ports - 出站端口定义
//!
//! 定义应用层与外部服务（支付网关、航班数据源、SMTP）之间的抽象接口

mod email_sender;
mod external_service;
mod flight_provider;
mod payment_gateway;

#[cfg(test)]
pub mod fakes;

pub use email_sender::{EmailSenderPort, EmailTemplate, SentEmail};
pub use external_service::{BoxError, ExternalServiceError};
pub use flight_provider::FlightProviderPort;
pub use payment_gateway::{PaymentGatewayPort, PaymentIntentParams};
