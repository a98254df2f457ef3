//! 主应用程序入口
//!
//! 启动 Axum Web API 服务，并在配置了 token 时启动 Telegram 机器人。

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use application::{
    CardService, CardServiceDependencies, SystemClock, TelegramCardService,
    TelegramCardServiceDependencies, TelegramUserService, TelegramUserServiceDependencies,
    UserService, UserServiceDependencies,
};
use config::AppConfig;
use infrastructure::{
    Db, PostgresCardRepository, PostgresTelegramCardRepository, PostgresTelegramUserRepository,
    PostgresUserRepository,
};
use telegram_bot::UpdateHandler;
use web_api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 读取环境变量配置
    let app_config = AppConfig::from_env_with_defaults();
    app_config.validate()?;

    tracing::info!(
        "连接数据库: {}",
        app_config.database.url.split('@').last().unwrap_or("unknown")
    );

    let pg_pool = Arc::new(
        Db::create_pool(&app_config.database.url, app_config.database.max_connections).await?,
    );

    // 运行迁移
    sqlx::migrate!("../../migrations").run(&*pg_pool).await?;

    // 仓储实例
    let card_repository = Arc::new(PostgresCardRepository::new(pg_pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let telegram_card_repository = Arc::new(PostgresTelegramCardRepository::new(pg_pool.clone()));
    let telegram_user_repository = Arc::new(PostgresTelegramUserRepository::new(pg_pool));

    // 应用层服务
    let card_service = Arc::new(CardService::new(CardServiceDependencies {
        card_repository,
        clock: Arc::new(SystemClock),
    }));
    let user_service = Arc::new(UserService::new(UserServiceDependencies { user_repository }));

    // Telegram 机器人（可选）
    if let Some(token) = app_config.telegram.bot_token.clone() {
        let telegram_card_service =
            Arc::new(TelegramCardService::new(TelegramCardServiceDependencies {
                core_cards: card_service.clone(),
                projection_repository: telegram_card_repository,
                strict_consistency: app_config.telegram.strict_consistency,
            }));
        let telegram_user_service =
            Arc::new(TelegramUserService::new(TelegramUserServiceDependencies {
                core_users: user_service.clone(),
                projection_repository: telegram_user_repository,
            }));

        let handler = Arc::new(UpdateHandler::new(
            telegram_card_service,
            telegram_user_service,
        ));

        tracing::info!("启动 Telegram 机器人");
        tokio::spawn(async move {
            telegram_bot::run_polling(&token, handler).await;
        });
    } else {
        tracing::info!("未配置 TELEGRAM_BOT_TOKEN，跳过 Telegram 机器人");
    }

    // 启动 Web 服务器
    let state = AppState::new(card_service, user_service);
    let app = router(state);

    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("卡片服务启动在 http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
