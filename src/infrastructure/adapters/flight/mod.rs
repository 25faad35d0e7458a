//! Flight Adapter - Amadeus 客户端实现

mod amadeus_client;

pub use amadeus_client::*;
