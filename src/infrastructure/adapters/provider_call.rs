//! Provider Call - 外部 HTTP 调用的统一收口
//!
//! 所有基于 reqwest 的适配器都通过 `ProviderCall` 发送请求：
//! - 传输失败 → Transport / Timeout，消息为该操作的固定回退信息
//! - 非 2xx → 尝试把响应体解析为 JSON 并提取 message，否则使用回退信息
//! - 2xx → 响应体 JSON 原样返回（空响应体为 null）
//!
//! 失败时在返回前输出一条带操作名的诊断日志。

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::ExternalServiceError;

/// 单次外部调用的描述
#[derive(Debug, Clone, Copy)]
pub struct ProviderCall {
    /// 操作名（日志用）
    pub operation: &'static str,
    /// 固定回退信息，例如 "Failed to confirm payment"
    pub fallback: &'static str,
    /// 超时时间（用于错误描述）
    pub timeout: Duration,
    /// 是否透传远端错误信息
    pub expose_provider_messages: bool,
}

impl ProviderCall {
    pub fn new(operation: &'static str, fallback: &'static str, timeout: Duration) -> Self {
        Self {
            operation,
            fallback,
            timeout,
            expose_provider_messages: true,
        }
    }

    pub fn expose_provider_messages(mut self, expose: bool) -> Self {
        self.expose_provider_messages = expose;
        self
    }

    /// 发送请求并把结果映射为 JSON 或统一错误
    pub async fn send(&self, request: RequestBuilder) -> Result<Value, ExternalServiceError> {
        let result = match request.send().await {
            Ok(response) => self.read_response(response).await,
            Err(e) => Err(self.map_transport_error(e)),
        };

        if let Err(err) = &result {
            tracing::error!(
                operation = self.operation,
                status = ?err.status_code(),
                error = %err,
                cause = err.cause().unwrap_or(""),
                "External service call failed"
            );
        }

        result
    }

    async fn read_response(&self, response: Response) -> Result<Value, ExternalServiceError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            let message = extract_provider_message(&body)
                .filter(|_| self.expose_provider_messages)
                .unwrap_or_else(|| self.fallback.to_string());
            return Err(ExternalServiceError::rejected(status.as_u16(), message));
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body)
            .map_err(|e| ExternalServiceError::invalid_response(self.fallback, e))
    }

    fn map_transport_error(&self, err: reqwest::Error) -> ExternalServiceError {
        if err.is_timeout() {
            ExternalServiceError::timeout(self.fallback, self.timeout)
        } else {
            ExternalServiceError::transport(self.fallback, err)
        }
    }
}

/// 从错误响应体中提取错误信息
///
/// 依次尝试：`message`、`error.message`（支付网关）、`errors[0].detail`（Amadeus）
pub fn extract_provider_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    let candidates = [
        value.get("message"),
        value.pointer("/error/message"),
        value.pointer("/errors/0/detail"),
    ];

    let message = candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|message| !message.is_empty())?;

    Some(message.to_string())
}

#[cfg(test)]
pub(crate) mod mock_provider {
    //! 测试用的本地 HTTP 服务

    use axum::Router;
    use tokio::net::TcpListener;

    /// 在随机端口上启动 mock 服务，返回 base URL
    pub async fn spawn(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// 返回一个当前无人监听的地址
    pub async fn unused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }
}
