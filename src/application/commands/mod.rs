//! 应用层 - 命令
//!
//! 每个命令对应一次外部服务调用

mod booking_commands;
mod flight_commands;
mod payment_commands;

pub mod handlers;

pub use booking_commands::*;
pub use flight_commands::*;
pub use payment_commands::*;
