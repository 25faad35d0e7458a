//! Ping Handler
//!
//! 健康检查、未知路由与方法不匹配

use axum::{extract::OriginalUri, http::Method, Json};
use serde::Serialize;

use crate::infrastructure::http::error::ApiError;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 未匹配任何路由
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("Route not found: {}", uri.path()))
}

/// 路径存在但方法不匹配
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method {} not allowed on {}", method, uri.path()))
}
