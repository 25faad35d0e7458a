//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Payment: 支付意图 ID、金额
//! - Flight: 航班搜索 / 询价 / 下单请求
//! - Booking: 预订确认邮件
//!
//! 所有结构只在单个请求内存活，不做持久化

pub mod booking;
pub mod flight;
pub mod payment;

mod common;
mod errors;

pub use common::{CurrencyCode, EmailAddress};
pub use errors::DomainError;
