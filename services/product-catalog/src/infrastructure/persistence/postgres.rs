//! PostgreSQL repository implementation

use async_trait::async_trait;
use cuba_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::error;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

use super::rows::ProductRow;

const SELECT_ALL: &str = "SELECT id, product_name, price FROM product";
const SELECT_BY_ID: &str = "SELECT id, product_name, price FROM product WHERE id = $1";
const INSERT: &str = "INSERT INTO product (product_name, price) VALUES ($1, $2) RETURNING id";
const UPDATE: &str = "UPDATE product SET product_name = $1, price = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM product WHERE id = $1";

fn database_error(operation: &'static str, e: sqlx::Error) -> AppError {
    error!(operation, error = %e, "Product query failed");
    AppError::database(e.to_string())
}

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("find_all", e))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(SELECT_BY_ID)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find_by_id", e))?;

        Ok(row.map(Product::from))
    }

    async fn create(&self, product: &NewProduct) -> AppResult<Product> {
        let id: i32 = sqlx::query_scalar(INSERT)
            .bind(&product.name)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("create", e))?;

        Ok(product.clone().with_id(ProductId(id)))
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let result = sqlx::query(UPDATE)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("update", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Product {} not found", product.id)));
        }

        Ok(())
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        // 删除不存在的 ID 不是错误
        sqlx::query(DELETE)
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete", e))?;

        Ok(())
    }
}
