//! last_check 修复工具入口
//!
//! 一次性运维工具：为活跃的用户配置回填缺失的 `last_check` 字段。
//! 交互式执行，`--yes` 可跳过确认。

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing::info;

use config_repair::cli::{AssumeYes, Cli, CommandRunner, ConfirmationPrompt, StdinPrompt};
use config_repair::repository::UserConfigRepository;
use config_repair::service::BackfillService;
use panel_shared::config::AppConfig;
use panel_shared::database::Database;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 读取 .env 中的 DATABASE_URL 等本地覆盖
    dotenvy::dotenv().ok();

    // 初始化 tracing 日志
    // 优先使用环境变量 RUST_LOG，否则使用命令行参数指定的级别
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .init();

    // 1. 加载配置
    let config = AppConfig::load("config-repair").unwrap_or_else(|e| {
        tracing::warn!("配置加载失败，使用默认配置: {}", e);
        AppConfig::default()
    });
    info!(environment = %config.environment, "配置加载完成");

    // 2. 初始化数据库连接
    let db = Database::connect(&config.database).await?;
    db.health_check().await?;
    info!("数据库连接就绪");

    // 3. 组装仓储、服务与执行器
    let repo = Arc::new(UserConfigRepository::new(db.pool().clone()));
    let service = BackfillService::new(db.pool().clone(), repo);

    let prompt: Arc<dyn ConfirmationPrompt> = if cli.yes {
        Arc::new(AssumeYes)
    } else {
        Arc::new(StdinPrompt)
    };
    let runner = CommandRunner::new(service, prompt);

    // 4. 执行修复流程，Ctrl+C 视为操作者中断
    tokio::select! {
        result = runner.run() => {
            result?;
        }
        _ = interrupt_signal() => {
            println!("\n\n❌ 操作被中断");
            std::process::exit(1);
        }
    }

    db.close().await;
    Ok(())
}

/// 等待中断信号
async fn interrupt_signal() {
    signal::ctrl_c()
        .await
        .expect("安装 Ctrl+C 信号处理器失败");
}
