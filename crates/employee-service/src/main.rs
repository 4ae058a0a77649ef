//! 员工记录服务
//!
//! 提供员工记录 CRUD 的 REST API。

use std::sync::Arc;

use employee_service::{
    EmployeeRepository, EmployeeRepositoryTrait, InMemoryEmployeeRepository, SERVICE_NAME, routes,
    state::AppState,
};
use employee_shared::{
    config::{AppConfig, StorageBackend},
    database::Database,
    observability,
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 统一加载配置：config/*.toml + EMPLOYEE_ 前缀环境变量
    let config = AppConfig::load(SERVICE_NAME)?;

    let _guard = observability::init(&config.observability, &config.service_name).await?;

    info!(
        environment = %config.environment,
        storage = ?config.storage.backend,
        "Starting {} on {}",
        config.service_name,
        config.server_addr()
    );

    let mut database = None;
    let repo: Arc<dyn EmployeeRepositoryTrait> = match config.storage.backend {
        StorageBackend::Postgres => {
            let db = Database::connect(&config.database).await.inspect_err(|e| {
                error!(
                    code = e.code(),
                    retryable = e.is_retryable(),
                    error = %e,
                    "数据库连接失败"
                );
            })?;
            let repo = EmployeeRepository::new(db.clone());
            if config.database.auto_create_schema {
                repo.ensure_schema().await?;
            }
            database = Some(db);
            Arc::new(repo)
        }
        StorageBackend::Memory => {
            if config.is_production() {
                warn!("In-memory storage in production: records are lost on restart");
            }
            Arc::new(InMemoryEmployeeRepository::new())
        }
    };

    if config.is_production() && config.cors.allowed_origins.iter().any(|o| o == "*") {
        warn!("cors.allowed_origins contains \"*\" in production; set explicit origins");
    }

    let app = routes::app(AppState::new(repo), &config.cors);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时停止接收新连接并等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = database {
        db.close().await;
    }

    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
///
/// 收到 Ctrl+C 或 SIGTERM 后返回，触发 axum 的优雅关闭流程。
/// 信号处理器注册失败时只记录错误，该信号源永不触发。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "注册 Ctrl+C 处理器失败");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "注册 SIGTERM 处理器失败");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
