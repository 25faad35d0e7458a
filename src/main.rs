//! Tripgate - 旅行预订后端代理
//!
//! 启动流程：加载配置 → 初始化日志 → 构建适配器 → 启动 HTTP 服务器

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use tripgate::config::{load_config, print_config, AppConfig};
use tripgate::infrastructure::adapters::{
    AmadeusClient, AmadeusClientConfig, HttpPaymentGateway, HttpPaymentGatewayConfig,
    SmtpEmailSender, SmtpEmailSenderConfig,
};
use tripgate::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Tripgate - travel booking proxy v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let state = build_state(&config)?;
    let server = HttpServer::new(ServerConfig::from(&config.server), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于配置文件
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},tripgate={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 创建适配器并组装应用状态
fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let expose = config.server.expose_provider_messages;

    let payment_gateway = HttpPaymentGateway::new(HttpPaymentGatewayConfig {
        base_url: config.payment.base_url.clone(),
        secret_key: config.payment.secret_key.clone(),
        return_url: config.payment.return_url.clone(),
        timeout: Duration::from_secs(config.payment.timeout_secs),
        expose_provider_messages: expose,
    })?;

    let flight_provider = AmadeusClient::new(AmadeusClientConfig {
        base_url: config.amadeus.base_url.clone(),
        client_id: config.amadeus.client_id.clone(),
        client_secret: config.amadeus.client_secret.clone(),
        timeout: Duration::from_secs(config.amadeus.timeout_secs),
        expose_provider_messages: expose,
    })?;

    let email_sender = SmtpEmailSender::new(SmtpEmailSenderConfig {
        host: config.smtp.host.clone(),
        port: config.smtp.port,
        secure: config.smtp.secure,
        user: config.smtp.user.clone(),
        password: config.smtp.password.clone(),
        from_email: config.smtp.from_email.clone(),
        from_name: config.smtp.from_name.clone(),
        timeout: Duration::from_secs(config.smtp.timeout_secs),
    })?;

    Ok(AppState::new(
        Arc::new(payment_gateway),
        Arc::new(flight_provider),
        Arc::new(email_sender),
    ))
}
