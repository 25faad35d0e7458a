//! In-memory port implementations for tests

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use super::{
    EmailSenderPort, EmailTemplate, ExternalServiceError, FlightProviderPort,
    PaymentGatewayPort, PaymentIntentParams, SentEmail,
};
use crate::domain::flight::{FlightOffer, FlightOrderRequest, FlightSearchRequest};
use crate::domain::payment::PaymentId;

/// 按固定结果应答并记录调用
pub struct FakePaymentGateway {
    outcome: Result<Value, ExternalServiceError>,
    pub calls: Mutex<Vec<String>>,
}

impl FakePaymentGateway {
    pub fn new(outcome: Result<Value, ExternalServiceError>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentGatewayPort for FakePaymentGateway {
    async fn confirm_payment(&self, payment_id: &PaymentId) -> Result<Value, ExternalServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("confirm:{}", payment_id));
        self.outcome.clone()
    }

    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> Result<Value, ExternalServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("create:{}:{}", params.amount.minor_units(), params.currency));
        self.outcome.clone()
    }
}

pub struct FakeFlightProvider {
    outcome: Result<Value, ExternalServiceError>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeFlightProvider {
    pub fn new(outcome: Result<Value, ExternalServiceError>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FlightProviderPort for FakeFlightProvider {
    async fn search_flights(&self, _request: &FlightSearchRequest) -> Result<Value, ExternalServiceError> {
        self.calls.lock().unwrap().push("search");
        self.outcome.clone()
    }

    async fn price_flight_offers(&self, _offers: &[FlightOffer]) -> Result<Value, ExternalServiceError> {
        self.calls.lock().unwrap().push("price");
        self.outcome.clone()
    }

    async fn create_flight_order(&self, _order: &FlightOrderRequest) -> Result<Value, ExternalServiceError> {
        self.calls.lock().unwrap().push("order");
        self.outcome.clone()
    }
}

pub struct FakeEmailSender {
    outcome: Result<(), ExternalServiceError>,
    pub sent: Mutex<Vec<EmailTemplate>>,
}

impl Default for FakeEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeEmailSender {
    pub fn new() -> Self {
        Self::with_outcome(Ok(()))
    }

    pub fn with_outcome(outcome: Result<(), ExternalServiceError>) -> Self {
        Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailSenderPort for FakeEmailSender {
    async fn send(&self, template: EmailTemplate) -> Result<SentEmail, ExternalServiceError> {
        self.outcome.clone()?;
        self.sent.lock().unwrap().push(template);
        Ok(SentEmail {
            message_id: Some("<fake@localhost>".to_string()),
        })
    }
}
