//! 商品业务服务

use sqlx::SqliteConnection;

use super::model::{Product, ProductCreate};
use crate::core::error::CoreError;

const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity";

/// 商品服务，借用当前请求的数据库会话
pub struct ProductService<'s> {
    conn: &'s mut SqliteConnection,
}

impl<'s> ProductService<'s> {
    pub fn new(conn: &'s mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// 全部商品，按 id 排序
    pub async fn list_products(&mut self) -> Result<Vec<Product>, CoreError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(products)
    }

    pub async fn get_product(&mut self, id: i64) -> Result<Product, CoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = ?",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(CoreError::product_not_found)
    }

    pub async fn create_product(&mut self, payload: ProductCreate) -> Result<Product, CoreError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, description, price, quantity) VALUES (?, ?, ?, ?) RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(payload.quantity)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(product)
    }

    /// 整体覆盖 `id` 对应记录的全部可写字段
    pub async fn update_product(
        &mut self,
        id: i64,
        payload: ProductCreate,
    ) -> Result<Product, CoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET name = ?, description = ?, price = ?, quantity = ? WHERE id = ? RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(payload.quantity)
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(CoreError::product_not_found)
    }

    pub async fn delete_product(&mut self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::product_not_found());
        }
        Ok(())
    }

    pub async fn count_products(&mut self) -> Result<i64, CoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }
}
