//! 商品处理器

use axum::{extract::Path, response::Json};
use serde::{Deserialize, Serialize};

use super::{
    model::{Product, ProductCreate},
    service::ProductService,
};
use crate::app::state::DbSession;
use crate::core::error::CoreError;

/// 删除成功的响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

pub async fn list_products(
    DbSession(mut session): DbSession,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = ProductService::new(&mut session).list_products().await?;
    Ok(Json(products))
}

pub async fn get_product(
    Path(id): Path<i64>,
    DbSession(mut session): DbSession,
) -> Result<Json<Product>, CoreError> {
    let product = ProductService::new(&mut session).get_product(id).await?;
    Ok(Json(product))
}

pub async fn create_product(
    DbSession(mut session): DbSession,
    Json(payload): Json<ProductCreate>,
) -> Result<Json<Product>, CoreError> {
    let product = ProductService::new(&mut session)
        .create_product(payload)
        .await?;
    tracing::info!("Created product: {} ({})", product.name, product.id);
    Ok(Json(product))
}

/// 更新商品：以路径中的 id 为准，请求体里的 id 被忽略
pub async fn update_product(
    Path(id): Path<i64>,
    DbSession(mut session): DbSession,
    Json(payload): Json<Product>,
) -> Result<Json<Product>, CoreError> {
    if payload.id != id {
        tracing::debug!("Ignoring body id {} in favour of path id {}", payload.id, id);
    }
    let product = ProductService::new(&mut session)
        .update_product(id, ProductCreate::from(payload))
        .await?;
    tracing::info!("Updated product: {} ({})", product.name, product.id);
    Ok(Json(product))
}

pub async fn delete_product(
    Path(id): Path<i64>,
    DbSession(mut session): DbSession,
) -> Result<Json<DeleteResponse>, CoreError> {
    ProductService::new(&mut session).delete_product(id).await?;
    tracing::info!("Deleted product: {}", id);
    Ok(Json(DeleteResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
