//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 预订 API 客户端配置（App 侧调用本服务）
    #[serde(default)]
    pub api: ApiClientConfig,

    /// Amadeus 航班服务配置
    #[serde(default)]
    pub amadeus: AmadeusConfig,

    /// 支付网关配置
    #[serde(default)]
    pub payment: PaymentConfig,

    /// SMTP 邮件配置
    #[serde(default)]
    pub smtp: SmtpConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 占位密钥的默认值，启动时若仍为这些值会输出警告
pub const PLACEHOLDER_AMADEUS_CLIENT_ID: &str = "your_amadeus_client_id";
pub const PLACEHOLDER_AMADEUS_CLIENT_SECRET: &str = "your_amadeus_client_secret";
pub const PLACEHOLDER_PAYMENT_SECRET_KEY: &str = "sk_test_placeholder";
pub const PLACEHOLDER_SMTP_PASSWORD: &str = "password";

impl AppConfig {
    /// 返回仍在使用占位值的密钥对应的环境变量名
    pub fn placeholder_secrets(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.amadeus.client_id == PLACEHOLDER_AMADEUS_CLIENT_ID {
            names.push("AMADEUS_CLIENT_ID");
        }
        if self.amadeus.client_secret == PLACEHOLDER_AMADEUS_CLIENT_SECRET {
            names.push("AMADEUS_CLIENT_SECRET");
        }
        if self.payment.secret_key == PLACEHOLDER_PAYMENT_SECRET_KEY {
            names.push("STRIPE_SECRET_KEY");
        }
        if self.smtp.password == PLACEHOLDER_SMTP_PASSWORD {
            names.push("SMTP_PASSWORD");
        }
        names
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 单个请求的处理时限（秒），超时返回 504
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// 是否把外部服务返回的错误信息原样透传给客户端
    #[serde(default = "default_expose_provider_messages")]
    pub expose_provider_messages: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3002
}

fn default_request_timeout() -> u64 {
    60
}

fn default_max_body_bytes() -> usize {
    50 * 1024 * 1024 // 50 MB
}

fn default_expose_provider_messages() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
            max_body_bytes: default_max_body_bytes(),
            expose_provider_messages: default_expose_provider_messages(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 预订 API 客户端配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiClientConfig {
    /// 预订后端的 Base URL（EXPO_PUBLIC_API_BASE_URL）
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:2000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Amadeus 配置
#[derive(Debug, Clone, Deserialize)]
pub struct AmadeusConfig {
    #[serde(default = "default_amadeus_client_id")]
    pub client_id: String,

    #[serde(default = "default_amadeus_client_secret")]
    pub client_secret: String,

    #[serde(default = "default_amadeus_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_amadeus_client_id() -> String {
    PLACEHOLDER_AMADEUS_CLIENT_ID.to_string()
}

fn default_amadeus_client_secret() -> String {
    PLACEHOLDER_AMADEUS_CLIENT_SECRET.to_string()
}

fn default_amadeus_base_url() -> String {
    "https://test.api.amadeus.com".to_string()
}

impl Default for AmadeusConfig {
    fn default() -> Self {
        Self {
            client_id: default_amadeus_client_id(),
            client_secret: default_amadeus_client_secret(),
            base_url: default_amadeus_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// 支付网关配置（Stripe 兼容 REST API）
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    #[serde(default = "default_payment_secret_key")]
    pub secret_key: String,

    #[serde(default = "default_payment_base_url")]
    pub base_url: String,

    /// 确认支付时携带的 return_url
    #[serde(default = "default_payment_return_url")]
    pub return_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_payment_secret_key() -> String {
    PLACEHOLDER_PAYMENT_SECRET_KEY.to_string()
}

fn default_payment_base_url() -> String {
    "https://api.stripe.com".to_string()
}

fn default_payment_return_url() -> String {
    "http://localhost:3000/payment-success".to_string()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            secret_key: default_payment_secret_key(),
            base_url: default_payment_base_url(),
            return_url: default_payment_return_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// SMTP 配置
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,

    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// true 使用隐式 TLS（465），false 使用 STARTTLS（若服务器支持）
    #[serde(default)]
    pub secure: bool,

    #[serde(default = "default_smtp_user")]
    pub user: String,

    #[serde(default = "default_smtp_password")]
    pub password: String,

    #[serde(default = "default_from_email")]
    pub from_email: String,

    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// SMTP 会话超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_smtp_host() -> String {
    "smtp.example.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_user() -> String {
    "user@example.com".to_string()
}

fn default_smtp_password() -> String {
    PLACEHOLDER_SMTP_PASSWORD.to_string()
}

fn default_from_email() -> String {
    "noreply@example.com".to_string()
}

fn default_from_name() -> String {
    "Travel Booking".to_string()
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            secure: false,
            user: default_smtp_user(),
            password: default_smtp_password(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            timeout_secs: default_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
