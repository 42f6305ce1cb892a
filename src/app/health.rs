//! 健康检查

use axum::response::Json;

use super::{product::service::ProductService, state::DbSession};
use crate::core::error::CoreError;

pub async fn health_check(
    DbSession(mut session): DbSession,
) -> Result<Json<serde_json::Value>, CoreError> {
    let products = ProductService::new(&mut session).count_products().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "products": products,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
