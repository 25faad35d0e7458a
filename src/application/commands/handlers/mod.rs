//! Command Handlers 实现

mod booking_handlers;
mod flight_handlers;
mod payment_handlers;

pub use booking_handlers::*;
pub use flight_handlers::*;
pub use payment_handlers::*;
