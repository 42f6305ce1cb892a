use product_catalog::config::{config_path, load_config};
use product_catalog::infrastructure::logger::Logger;
use product_catalog::server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = config_path();
    let config = load_config(path.as_deref())?;

    Logger::init(&config.logging);

    match &path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }
    info!("启动商品目录服务...");

    server::run(config).await
}
