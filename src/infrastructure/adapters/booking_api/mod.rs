//! Booking API Adapter - 本服务 HTTP 接口的客户端

mod booking_api_client;

pub use booking_api_client::*;
