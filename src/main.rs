use std::time::Duration;

use productos_api::{
    app::product::{AppState, ProductStore},
    build_router,
    infrastructure::{config::AppConfig, logger::Logger},
    PRODUCTS_PATH,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load(std::env::args().nth(1))?;
    Logger::init(config.logging.level()?);

    info!("启动产品 REST API 服务器...");

    let store = ProductStore::new();
    info!("✅ 已初始化 {} 个示例产品", store.len().await);

    let app = build_router(
        AppState::new(store),
        Duration::from_secs(config.http.timeout_seconds),
    );

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 产品 REST API 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    {}         - 获取所有产品", PRODUCTS_PATH);
    info!("   POST   {}         - 创建新产品", PRODUCTS_PATH);
    info!("   GET    {}/:id     - 获取特定产品", PRODUCTS_PATH);
    info!("   PUT    {}/:id     - 更新产品", PRODUCTS_PATH);
    info!("   DELETE {}/:id     - 删除产品", PRODUCTS_PATH);
    info!("   GET    /health                - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("收到 Ctrl+C，正在关闭服务器...");
    }
}
