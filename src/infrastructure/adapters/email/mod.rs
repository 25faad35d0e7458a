//! Email Adapter - SMTP 邮件发送实现

mod smtp_email_sender;
mod templates;

pub use smtp_email_sender::*;
pub use templates::{render, Branding, RenderedEmail};
