//! 服务配置
//!
//! 配置按段组织（http / database / cors / logging），从 TOML 文件读取，
//! 缺失的段和键使用默认值。配置值在启动时构造后显式传递，不做全局单例。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config/catalog.toml";

/// 服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 跨域配置
    pub cors: CorsConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite 连接串，例如 `sqlite://products.db`
    pub url: String,
    /// 连接池最大连接数
    pub max_connections: u32,
    /// 获取连接的超时时间（秒）
    pub acquire_timeout_seconds: u64,
    /// 空表时是否写入默认商品
    pub seed: bool,
}

/// 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// 允许的来源
    pub allowed_origins: Vec<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://products.db".to_string(),
            max_connections: 5,
            acquire_timeout_seconds: 8,
            seed: true,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 用环境变量覆盖配置（`DATABASE_URL`、`PORT`）
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("无效的端口: {}", port)))?;
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        self.socket_addr()?;

        if !self.database.url.starts_with("sqlite:") {
            return Err(ConfigError::Validation(format!(
                "仅支持 sqlite 连接串: {}",
                self.database.url
            )));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation("最大连接数必须大于0".to_string()));
        }

        // 允许携带凭证时不能使用通配来源
        if self
            .cors
            .allowed_origins
            .iter()
            .any(|o| o.is_empty() || o == "*")
        {
            return Err(ConfigError::Validation(
                "跨域来源必须是具体地址".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }

    /// 监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.bind_address, self.http.port)
            .parse()
            .map_err(|_| {
                ConfigError::Validation(format!(
                    "无效的监听地址: {}:{}",
                    self.http.bind_address, self.http.port
                ))
            })
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 配置文件路径：`CATALOG_CONFIG` 环境变量优先，其次存在的 [`DEFAULT_CONFIG_PATH`]
pub fn config_path() -> Option<PathBuf> {
    std::env::var("CATALOG_CONFIG")
        .ok()
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_PATH)).filter(|p| p.exists()))
}

/// 从文件或默认值加载配置，随后应用环境变量覆盖并验证
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    config.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}
