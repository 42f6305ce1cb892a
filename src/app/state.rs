//! 应用状态与请求级数据库会话

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::core::error::CoreError;
use crate::infrastructure::database::{DatabaseManager, Session};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseManager,
}

impl AppState {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

impl FromRef<AppState> for DatabaseManager {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

/// 请求级数据库会话
///
/// 处理器开始前从连接池获取，处理器返回（无论成功、出错还是 panic）后随 drop 归还。
pub struct DbSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    DatabaseManager: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let db = DatabaseManager::from_ref(state);
        let session = db.session().await?;
        Ok(Self(session))
    }
}
