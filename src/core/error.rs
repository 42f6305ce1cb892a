//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// 商品不存在时返回的固定消息
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

impl CoreError {
    pub fn product_not_found() -> Self {
        CoreError::NotFound(PRODUCT_NOT_FOUND.to_string())
    }
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            CoreError::Database(e) => {
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
