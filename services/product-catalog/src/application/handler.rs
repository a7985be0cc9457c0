//! 商品用例
//!
//! 每个方法原样转发给仓储，不承载业务规则

use std::sync::Arc;

use async_trait::async_trait;
use cuba_errors::AppResult;
use tracing::debug;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;

use super::commands::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand};
use super::queries::GetProductQuery;

/// 商品用例接口
#[async_trait]
pub trait ProductUseCase: Send + Sync {
    async fn get_all_products(&self) -> AppResult<Vec<Product>>;

    async fn get_product_by_id(&self, query: GetProductQuery) -> AppResult<Option<Product>>;

    async fn create_product(&self, cmd: CreateProductCommand) -> AppResult<Product>;

    async fn update_product(&self, cmd: UpdateProductCommand) -> AppResult<()>;

    async fn delete_product(&self, cmd: DeleteProductCommand) -> AppResult<()>;
}

pub struct ProductHandler {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl ProductUseCase for ProductHandler {
    async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        debug!("Listing products");
        self.product_repo.find_all().await
    }

    async fn get_product_by_id(&self, query: GetProductQuery) -> AppResult<Option<Product>> {
        debug!(product_id = %query.id, "Getting product");
        self.product_repo.find_by_id(query.id).await
    }

    async fn create_product(&self, cmd: CreateProductCommand) -> AppResult<Product> {
        debug!(name = %cmd.name, "Creating product");
        self.product_repo.create(&cmd.into()).await
    }

    async fn update_product(&self, cmd: UpdateProductCommand) -> AppResult<()> {
        debug!(product_id = %cmd.id, "Updating product");
        self.product_repo.update(&cmd.into()).await
    }

    async fn delete_product(&self, cmd: DeleteProductCommand) -> AppResult<()> {
        debug!(product_id = %cmd.id, "Deleting product");
        self.product_repo.delete(cmd.id).await
    }
}
