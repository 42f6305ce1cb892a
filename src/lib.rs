//! # 商品目录服务
//!
//! 基于 Axum + SQLx(SQLite) 的商品 CRUD 服务：
//! - app: 商品模型、服务、处理器与启动时的默认数据
//! - core: 错误处理与请求日志中间件
//! - infrastructure: 数据库句柄与日志初始化
//! - router / server: 路由组装与服务启动

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod router;
pub mod server;

pub use app::product::model::{Product, ProductCreate};
pub use app::state::AppState;
pub use config::Config;
pub use infrastructure::database::DatabaseManager;
pub use router::create_router;
