//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod booking_api;
pub mod email;
pub mod flight;
pub mod payment;
pub mod provider_call;

pub use booking_api::*;
pub use email::*;
pub use flight::*;
pub use payment::*;
