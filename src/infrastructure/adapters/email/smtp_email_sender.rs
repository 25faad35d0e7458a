//! SMTP Email Sender - 通过 lettre 异步 SMTP 发送邮件
//!
//! 实现 EmailSenderPort trait
//!
//! - `secure = true`: 隐式 TLS（通常为 465 端口）
//! - `secure = false`: 机会式 STARTTLS
//! - 配置了用户名时才进行认证

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;
use uuid::Uuid;

use super::templates::{render, Branding, RenderedEmail};
use crate::application::ports::{
    BoxError, EmailSenderPort, EmailTemplate, ExternalServiceError, SentEmail,
};

const SEND_FALLBACK: &str = "Failed to send email";

/// SMTP 发送器配置
#[derive(Debug, Clone)]
pub struct SmtpEmailSenderConfig {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub user: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
    /// 单封邮件的发送超时
    pub timeout: Duration,
}

impl Default for SmtpEmailSenderConfig {
    fn default() -> Self {
        Self {
            host: "smtp.example.com".to_string(),
            port: 587,
            secure: false,
            user: String::new(),
            password: String::new(),
            from_email: "noreply@example.com".to_string(),
            from_name: "Travel Booking".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// SMTP 邮件发送器
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    branding: Branding,
    timeout: Duration,
}

impl SmtpEmailSender {
    pub fn new(config: SmtpEmailSenderConfig) -> Result<Self, ExternalServiceError> {
        let from_address: Address = config
            .from_email
            .parse()
            .map_err(|e| ExternalServiceError::transport("Invalid sender address", e))?;

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| ExternalServiceError::transport("Failed to initialize SMTP transport", e))?
        } else {
            let tls = TlsParameters::new(config.host.clone())
                .map_err(|e| ExternalServiceError::transport("Failed to initialize SMTP transport", e))?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .tls(Tls::Opportunistic(tls))
        };

        let mut builder = builder.port(config.port);
        if !config.user.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ));
        }

        tracing::info!(
            host = %config.host,
            port = config.port,
            secure = config.secure,
            "SMTP transport configured"
        );

        Ok(Self {
            transport: builder.build(),
            from: Mailbox::new(Some(config.from_name.clone()), from_address),
            branding: Branding {
                company_name: config.from_name,
                support_email: config.from_email,
            },
            timeout: config.timeout,
        })
    }

    fn next_message_id(&self) -> String {
        format!("<{}@{}>", Uuid::new_v4(), self.from.email.domain())
    }

    async fn deliver(
        &self,
        to: &str,
        rendered: RenderedEmail,
        message_id: String,
    ) -> Result<(), BoxError> {
        let to: Address = to.parse()?;

        let message = Message::builder()
            .message_id(Some(message_id))
            .from(self.from.clone())
            .to(Mailbox::new(None, to))
            .subject(rendered.subject)
            .header(ContentType::TEXT_HTML)
            .body(rendered.html)?;

        match tokio::time::timeout(self.timeout, self.transport.send(message)).await {
            Ok(result) => {
                result?;
                Ok(())
            }
            Err(_) => Err(Box::new(ExternalServiceError::timeout(
                SEND_FALLBACK,
                self.timeout,
            ))),
        }
    }
}

#[async_trait]
impl EmailSenderPort for SmtpEmailSender {
    async fn send(&self, template: EmailTemplate) -> Result<SentEmail, ExternalServiceError> {
        let to = template.recipient().as_str().to_string();
        let rendered = render(&template, &self.branding);
        let subject = rendered.subject.clone();
        let message_id = self.next_message_id();

        tracing::debug!(to = %to, subject = %subject, "Sending email");

        match self.deliver(&to, rendered, message_id.clone()).await {
            Ok(()) => {
                tracing::info!(to = %to, message_id = %message_id, "Email sent");
                Ok(SentEmail {
                    message_id: Some(message_id),
                })
            }
            Err(e) => {
                let err = ExternalServiceError::normalize(SEND_FALLBACK, e);
                tracing::error!(
                    to = %to,
                    subject = %subject,
                    error = %err,
                    cause = err.cause().unwrap_or(""),
                    "Failed to send email"
                );
                Err(err)
            }
        }
    }
}
