//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 具名环境变量（PORT、SMTP_HOST、AMADEUS_CLIENT_ID ...）
//! 2. 前缀环境变量（TRIPGATE_SERVER__REQUEST_TIMEOUT_SECS ...）
//! 3. 配置文件（tripgate.toml）
//! 4. 默认值
//!
//! 缺失的变量永远不会导致失败，只会回退到默认值；
//! 只有格式错误（例如 `PORT=abc`）才会返回错误。

use config::{Config, ConfigError as ConfigCrateError, Environment, File, Map};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 环境变量快照
pub type EnvMap = Map<String, String>;

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["tripgate", "tripgate.local"];

/// 前缀环境变量
const ENV_PREFIX: &str = "TRIPGATE";

/// 具名环境变量到配置键的映射
pub const ENV_BINDINGS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("EXPO_PUBLIC_API_BASE_URL", "api.base_url"),
    ("AMADEUS_CLIENT_ID", "amadeus.client_id"),
    ("AMADEUS_CLIENT_SECRET", "amadeus.client_secret"),
    ("AMADEUS_BASE_URL", "amadeus.base_url"),
    ("STRIPE_SECRET_KEY", "payment.secret_key"),
    ("STRIPE_BASE_URL", "payment.base_url"),
    ("PAYMENT_RETURN_URL", "payment.return_url"),
    ("SMTP_HOST", "smtp.host"),
    ("SMTP_PORT", "smtp.port"),
    ("SMTP_SECURE", "smtp.secure"),
    ("SMTP_USER", "smtp.user"),
    ("SMTP_PASSWORD", "smtp.password"),
    ("FROM_EMAIL", "smtp.from_email"),
    ("FROM_NAME", "smtp.from_name"),
];

/// 从进程环境加载应用配置
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let env: EnvMap = std::env::vars().collect();
    load_config_from(None, &env)
}

/// 从指定配置文件和环境变量快照加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `env` - 环境变量快照
pub fn load_config_from(config_path: Option<&Path>, env: &EnvMap) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3002)?
        .set_default("server.request_timeout_secs", 60)?
        .set_default("server.max_body_bytes", 50 * 1024 * 1024)?
        .set_default("server.expose_provider_messages", true)?
        .set_default("api.base_url", "http://localhost:2000")?
        .set_default("api.timeout_secs", 30)?
        .set_default("amadeus.base_url", "https://test.api.amadeus.com")?
        .set_default("amadeus.timeout_secs", 30)?
        .set_default("payment.base_url", "https://api.stripe.com")?
        .set_default("payment.timeout_secs", 30)?
        .set_default("smtp.host", "smtp.example.com")?
        .set_default("smtp.port", 587)?
        .set_default("smtp.secure", false)?
        .set_default("smtp.timeout_secs", 30)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，例如 TRIPGATE_SERVER__REQUEST_TIMEOUT_SECS=30
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(env.clone())),
    );

    // 4. 具名环境变量（最高优先级），空字符串视为未设置
    for (var, key) in ENV_BINDINGS {
        let value = env.get(*var).filter(|v| !v.is_empty()).cloned();
        builder = builder.set_override_option(*key, value)?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 只拒绝结构上不可能工作的值；占位密钥不在此处拒绝
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.request_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Request timeout cannot be 0".to_string(),
        ));
    }

    let base_urls = [
        ("api.base_url", &config.api.base_url),
        ("amadeus.base_url", &config.amadeus.base_url),
        ("payment.base_url", &config.payment.base_url),
    ];
    for (key, url) in base_urls {
        if url.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                key
            )));
        }
    }

    let timeouts = [
        ("api.timeout_secs", config.api.timeout_secs),
        ("amadeus.timeout_secs", config.amadeus.timeout_secs),
        ("payment.timeout_secs", config.payment.timeout_secs),
        ("smtp.timeout_secs", config.smtp.timeout_secs),
    ];
    for (key, secs) in timeouts {
        if secs == 0 {
            return Err(ConfigError::ValidationError(format!("{} cannot be 0", key)));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），密钥不输出
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Request Timeout: {}s", config.server.request_timeout_secs);
    tracing::info!("Expose Provider Messages: {}", config.server.expose_provider_messages);
    tracing::info!("Booking API: {}", config.api.base_url);
    tracing::info!("Amadeus: {} (timeout {}s)", config.amadeus.base_url, config.amadeus.timeout_secs);
    tracing::info!("Payment Gateway: {} (timeout {}s)", config.payment.base_url, config.payment.timeout_secs);
    tracing::info!(
        "SMTP: {}:{} (secure: {}, user: {})",
        config.smtp.host,
        config.smtp.port,
        config.smtp.secure,
        config.smtp.user
    );
    tracing::info!("Mail From: {} <{}>", config.smtp.from_name, config.smtp.from_email);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");

    for name in config.placeholder_secrets() {
        tracing::warn!(
            variable = name,
            "{} is not set, using a placeholder value unsuitable for production",
            name
        );
    }
}
