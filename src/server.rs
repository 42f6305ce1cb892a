//! 服务启动与优雅退出

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use crate::app::{product::seed::seed_products, state::AppState};
use crate::config::Config;
use crate::infrastructure::database::DatabaseManager;
use crate::router::create_router;

/// 打开数据库、写入默认数据，然后开始接收请求，直到收到退出信号
pub async fn run(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database: {}", config.database.url);
    let db = DatabaseManager::connect(&config.database)
        .await
        .with_context(|| format!("无法打开数据库 {}", config.database.url))?;

    if config.database.seed {
        seed_products(&db).await.context("写入默认商品失败")?;
    }

    let app = create_router(AppState::new(db.clone()), &config.cors)?;

    let bind_addr = config.socket_addr()?;
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("无法绑定到 {}", bind_addr))?;
    let addr = listener.local_addr()?;

    info!("🚀 Product catalog server running on http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /               - 问候");
    info!("   GET    /health         - 健康检查");
    info!("   GET    /products       - 获取所有商品");
    info!("   POST   /products       - 创建商品");
    info!("   GET    /products/:id   - 获取特定商品");
    info!("   PUT    /products/:id   - 更新商品");
    info!("   DELETE /products/:id   - 删除商品");
    info!("🌐 CORS 允许来源: {:?}", config.cors.allowed_origins);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
