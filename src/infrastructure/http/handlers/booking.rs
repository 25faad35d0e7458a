//! Booking HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{BookingConfirmationSent, SendBookingConfirmation};
use crate::domain::booking::BookingConfirmationRequest;
use crate::infrastructure::http::dto::ApiJson;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 发送预订确认邮件
///
/// POST /api/pdf/send-confirmation（别名 /api/bookings/send-confirmation）
pub async fn send_confirmation(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<BookingConfirmationRequest>,
) -> Result<Json<BookingConfirmationSent>, ApiError> {
    let result = state
        .send_booking_confirmation_handler
        .handle(SendBookingConfirmation { request })
        .await?;

    Ok(Json(result))
}
