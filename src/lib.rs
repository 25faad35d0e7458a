//! Tripgate - 旅行预订后端代理
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Payment: 支付意图 ID、金额
//! - Flight: 航班搜索、询价、下单请求结构
//! - Booking: 预订确认
//!
//! 应用层 (application/):
//! - Ports: 端口定义（PaymentGateway, FlightProvider, EmailSender）
//! - Commands: 命令处理器，校验后调用一次外部服务
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API、统一错误信封、请求日志与截止时间
//! - Adapters: 支付网关、Amadeus、SMTP、Booking API 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
