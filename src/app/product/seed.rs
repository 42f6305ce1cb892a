//! 启动时写入默认商品

use sqlx::SqliteConnection;
use tracing::info;

use super::model::Product;
use super::service::ProductService;
use crate::core::error::CoreError;
use crate::infrastructure::database::DatabaseManager;

/// 默认商品，按顺序写入
pub fn default_products() -> Vec<Product> {
    [
        (1, "phone", "budget phone", 99.0, 10),
        (2, "tablet", "budget tablet", 299.0, 15),
        (3, "laptop", "budget laptop", 599.0, 5),
        (4, "desktop", "budget desktop", 799.0, 8),
    ]
    .into_iter()
    .map(|(id, name, description, price, quantity)| Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        quantity,
    })
    .collect()
}

/// 表为空时写入默认商品，返回实际写入的行数
pub async fn seed_products(db: &DatabaseManager) -> Result<u64, CoreError> {
    let mut session = db.session().await?;

    let count = ProductService::new(&mut session).count_products().await?;
    if count > 0 {
        info!("Database already contains {} products, skipping seed", count);
        return Ok(0);
    }

    let inserted = insert_default_products(&mut session).await?;
    info!("✅ Seeded {} default products", inserted);
    Ok(inserted)
}

/// 每条单独提交；id 固定且冲突时忽略，并发启动也只会留下一份
async fn insert_default_products(conn: &mut SqliteConnection) -> Result<u64, CoreError> {
    let mut inserted = 0;
    for product in default_products() {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO products (id, name, description, price, quantity) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .execute(&mut *conn)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_seed_empty_table() {
        let db = DatabaseManager::in_memory().await.unwrap();
        assert_eq!(seed_products(&db).await.unwrap(), 4);

        let mut session = db.session().await.unwrap();
        let products = ProductService::new(&mut session)
            .list_products()
            .await
            .unwrap();
        assert_eq!(products, default_products());
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_table() {
        let db = DatabaseManager::in_memory().await.unwrap();
        {
            let mut session = db.session().await.unwrap();
            sqlx::query(
                "INSERT INTO products (name, description, price, quantity) VALUES ('cable', 'usb cable', 5.0, 100)",
            )
            .execute(&mut *session)
            .await
            .unwrap();
        }

        assert_eq!(seed_products(&db).await.unwrap(), 0);
        let mut session = db.session().await.unwrap();
        assert_eq!(
            ProductService::new(&mut session).count_products().await.unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_repeated_insert_is_ignored() {
        let db = DatabaseManager::in_memory().await.unwrap();
        let mut session = db.session().await.unwrap();

        assert_eq!(insert_default_products(&mut session).await.unwrap(), 4);
        assert_eq!(insert_default_products(&mut session).await.unwrap(), 0);
        assert_eq!(
            ProductService::new(&mut session).count_products().await.unwrap(),
            4
        );
    }

    #[tokio::test]
    async fn test_reopened_file_is_not_reseeded() {
        let dir = tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("products.db").display()),
            ..DatabaseConfig::default()
        };

        let db = DatabaseManager::connect(&config).await.unwrap();
        assert_eq!(seed_products(&db).await.unwrap(), 4);
        {
            let mut session = db.session().await.unwrap();
            ProductService::new(&mut session).delete_product(2).await.unwrap();
        }
        db.close().await;

        let db = DatabaseManager::connect(&config).await.unwrap();
        assert_eq!(seed_products(&db).await.unwrap(), 0);
        let mut session = db.session().await.unwrap();
        assert_eq!(
            ProductService::new(&mut session).count_products().await.unwrap(),
            3
        );
    }
}
