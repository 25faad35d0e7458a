//! 邮件模板渲染

use chrono::{Datelike, Utc};

use crate::application::ports::EmailTemplate;

/// 渲染后的邮件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// 模板中的品牌信息
#[derive(Debug, Clone)]
pub struct Branding {
    pub company_name: String,
    pub support_email: String,
}

pub fn render(template: &EmailTemplate, branding: &Branding) -> RenderedEmail {
    match template {
        EmailTemplate::BookingConfirmation {
            booking_reference,
            passenger_name,
            ..
        } => booking_confirmation(booking_reference.as_str(), passenger_name, branding),
    }
}

fn booking_confirmation(reference: &str, passenger: &str, branding: &Branding) -> RenderedEmail {
    let reference = escape_html(reference);
    let passenger = escape_html(passenger);
    let company = escape_html(&branding.company_name);
    let support = escape_html(&branding.support_email);
    let year = Utc::now().year();

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Booking Confirmation - {reference}</title>
</head>
<body style="margin:0;padding:0;background-color:#f2f2f2;font-family:'Helvetica Neue',Arial,sans-serif;color:#333;">
  <div style="max-width:600px;margin:30px auto;background:#ffffff;border-radius:10px;overflow:hidden;">
    <div style="background-color:#000000;padding:30px 20px;text-align:center;color:#ffffff;font-size:20px;font-weight:600;">{company}</div>
    <div style="padding:30px;">
      <h1>Booking Confirmation</h1>
      <p>Hello {passenger},</p>
      <p>Thank you for booking with <strong>{company}</strong>! Your trip is confirmed.</p>
      <div style="background:#f8f8f8;border-radius:8px;padding:20px;margin:20px 0;">
        <p><strong>Booking Reference:</strong></p>
        <p style="font-size:24px;font-weight:700;letter-spacing:2px;">{reference}</p>
      </div>
      <p>Safe travels,</p>
      <p><strong>The {company} Team</strong></p>
    </div>
    <div style="padding:20px;text-align:center;font-size:12px;color:#777;">
      <p>Customer Support: {support}</p>
      <p>&copy; {year} {company}. All rights reserved.</p>
    </div>
  </div>
</body>
</html>
"#
    );

    RenderedEmail {
        subject: format!("Booking Confirmation - {}", reference),
        html,
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
