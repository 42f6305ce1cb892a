//! 商品数据模型

use serde::{Deserialize, Serialize};

/// 创建商品的请求体，不含 id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

/// 完整商品记录，既是读取结果也是更新请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    pub fn from_create(id: i64, create: ProductCreate) -> Self {
        Self {
            id,
            name: create.name,
            description: create.description,
            price: create.price,
            quantity: create.quantity,
        }
    }
}

/// 丢弃 id，只保留可写字段
impl From<Product> for ProductCreate {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}
