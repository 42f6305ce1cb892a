//! 数据库基础设施

use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error, Sqlite,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

/// 每个请求独占的数据库会话，drop 时归还连接池
pub type Session = PoolConnection<Sqlite>;

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id          INTEGER PRIMARY KEY,
        name        TEXT    NOT NULL,
        description TEXT    NOT NULL,
        price       REAL    NOT NULL,
        quantity    INTEGER NOT NULL
    )
"#;

/// 数据库句柄
///
/// 在启动时显式构造并注入路由层，所有克隆共享同一个连接池。
#[derive(Clone)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// 打开数据库文件（不存在时创建）并建表
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        // 内存库在最后一个连接关闭时即被释放，保持一个常驻连接
        let pool_options = if config.url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect_with(options)
            .await?;

        let manager = Self { pool };
        manager.ensure_schema().await?;
        Ok(manager)
    }

    /// 打开内存数据库，用于测试
    pub async fn in_memory() -> Result<Self, Error> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// 建表，已存在时不做任何修改
    async fn ensure_schema(&self) -> Result<(), Error> {
        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&self.pool)
            .await?;
        info!("Database schema ready");
        Ok(())
    }

    /// 获取一个作用域会话
    pub async fn session(&self) -> Result<Session, Error> {
        self.pool.acquire().await
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_session_is_released_on_drop() {
        let db = DatabaseManager::in_memory().await.unwrap();

        // 内存库只有一个连接，第二次获取成功说明第一次已归还
        {
            let mut session = db.session().await.unwrap();
            sqlx::query("SELECT 1").execute(&mut *session).await.unwrap();
        }
        let mut session = db.session().await.unwrap();
        let (one,): (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&mut *session)
            .await
            .unwrap();
        assert_eq!(one, 1);
    }

    #[tokio::test]
    async fn test_connect_creates_file_and_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            ..DatabaseConfig::default()
        };

        let db = DatabaseManager::connect(&config).await.unwrap();
        assert!(path.exists());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(db.get_pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
        db.close().await;

        // 再次打开不会改动已有表
        let db = DatabaseManager::connect(&config).await.unwrap();
        db.close().await;
    }

    #[tokio::test]
    async fn test_not_null_columns() {
        let db = DatabaseManager::in_memory().await.unwrap();
        let result = sqlx::query(
            "INSERT INTO products (name, description, price, quantity) VALUES (?, NULL, ?, ?)",
        )
        .bind("phone")
        .bind(99.0)
        .bind(10)
        .execute(db.get_pool())
        .await;
        assert!(result.is_err());
    }
}
