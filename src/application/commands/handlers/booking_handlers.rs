//! Booking Command Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::SendBookingConfirmation;
use crate::application::error::ApplicationError;
use crate::application::ports::{EmailSenderPort, EmailTemplate};
use crate::domain::booking::BookingReference;

/// 发送确认邮件响应
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmationSent {
    pub success: bool,
    pub message: String,
    pub booking_reference: BookingReference,
}

/// SendBookingConfirmation Handler
pub struct SendBookingConfirmationHandler {
    email_sender: Arc<dyn EmailSenderPort>,
}

impl SendBookingConfirmationHandler {
    pub fn new(email_sender: Arc<dyn EmailSenderPort>) -> Self {
        Self { email_sender }
    }

    pub async fn handle(
        &self,
        command: SendBookingConfirmation,
    ) -> Result<BookingConfirmationSent, ApplicationError> {
        let request = command.request;
        request.validate()?;

        let passenger_name = request
            .lead_passenger_name()
            .ok_or_else(|| ApplicationError::validation("passengers must not be empty"))?;

        let sent = self
            .email_sender
            .send(EmailTemplate::BookingConfirmation {
                to: request.email.clone(),
                booking_reference: request.booking_reference.clone(),
                passenger_name,
            })
            .await?;

        tracing::info!(
            booking_reference = %request.booking_reference,
            message_id = ?sent.message_id,
            "Booking confirmation email sent"
        );

        Ok(BookingConfirmationSent {
            success: true,
            message: "Confirmation email sent successfully".to_string(),
            booking_reference: request.booking_reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::fakes::FakeEmailSender;
    use crate::application::ports::ExternalServiceError;
    use serde_json::json;

    fn command() -> SendBookingConfirmation {
        SendBookingConfirmation {
            request: serde_json::from_value(json!({
                "email": "jane@example.com",
                "bookingReference": "ABC123",
                "passengers": [
                    { "firstName": "Jane", "lastName": "Doe" },
                    { "firstName": "John", "lastName": "Doe" }
                ]
            }))
            .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_sends_to_lead_passenger_name() {
        let sender = Arc::new(FakeEmailSender::new());
        let handler = SendBookingConfirmationHandler::new(sender.clone());

        let result = handler.handle(command()).await.unwrap();

        assert!(result.success);
        assert_eq!(result.booking_reference.as_str(), "ABC123");
        let sent = sender.sent.lock().unwrap();
        match &sent[0] {
            EmailTemplate::BookingConfirmation { to, passenger_name, .. } => {
                assert_eq!(to.as_str(), "jane@example.com");
                assert_eq!(passenger_name, "Jane Doe");
            }
        }
    }

    #[tokio::test]
    async fn test_smtp_failure_is_surfaced() {
        let sender = Arc::new(FakeEmailSender::with_outcome(Err(
            ExternalServiceError::transport("Failed to send email", "connection refused"),
        )));
        let handler = SendBookingConfirmationHandler::new(sender.clone());

        let err = handler.handle(command()).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to send email");
        assert_eq!(sender.sent_count(), 0);
    }
}
