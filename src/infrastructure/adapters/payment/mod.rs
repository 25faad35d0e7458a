//! Payment Adapter - 支付网关 HTTP 客户端实现

mod http_payment_gateway;

pub use http_payment_gateway::*;
