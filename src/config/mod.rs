//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 具名环境变量（最高优先级）
//! - 前缀环境变量
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）
//!
//! 配置在启动时加载一次，之后只读，显式传递给各个适配器

mod loader;
mod types;

pub use loader::{load_config, load_config_from, print_config, ConfigError, EnvMap, ENV_BINDINGS};
pub use types::{
    AmadeusConfig, ApiClientConfig, AppConfig, LogConfig, PaymentConfig, ServerConfig, SmtpConfig,
};
