//! HTTP Handlers

mod booking;
mod flight;
mod payment;
mod ping;

pub use booking::*;
pub use flight::*;
pub use payment::*;
pub use ping::*;
