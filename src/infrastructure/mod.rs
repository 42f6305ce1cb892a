//! 基础设施层：数据库与日志

pub mod database;
pub mod logger;
