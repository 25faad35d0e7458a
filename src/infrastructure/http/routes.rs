//! HTTP Routes
//!
//! API Endpoints:
//! - /api/payments/confirm             POST  确认支付
//! - /api/payments/create-intent       POST  创建支付意图
//! - /api/flights/search               POST  搜索航班
//! - /api/flights/price                POST  航班询价
//! - /api/flights/book                 POST  航班下单（201）
//! - /api/pdf/send-confirmation        POST  发送预订确认邮件
//! - /api/bookings/send-confirmation   POST  同上（别名）
//! - /api/ping                         GET   健康检查
//!
//! 其余路径返回 404 错误信封，方法不匹配返回 405 错误信封

use axum::{
    handler::Handler,
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::route_not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/ping",
            get(handlers::ping).fallback(handlers::method_not_allowed),
        )
        .nest("/payments", payment_routes())
        .nest("/flights", flight_routes())
        .nest("/pdf", booking_routes())
        .nest("/bookings", booking_routes())
}

/// Payment 路由
fn payment_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/confirm", post_only(handlers::confirm_payment))
        .route("/create-intent", post_only(handlers::create_payment_intent))
}

/// Flight 路由
fn flight_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search", post_only(handlers::search_flights))
        .route("/price", post_only(handlers::price_flights))
        .route("/book", post_only(handlers::create_booking))
}

/// Booking 路由
fn booking_routes() -> Router<Arc<AppState>> {
    Router::new().route("/send-confirmation", post_only(handlers::send_confirmation))
}

/// 只接受 POST，其余方法返回 405 错误信封
fn post_only<H, T>(handler: H) -> MethodRouter<Arc<AppState>>
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    post(handler).fallback(handlers::method_not_allowed)
}
