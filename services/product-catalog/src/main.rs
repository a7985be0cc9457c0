//! product-catalog Service

use std::sync::Arc;

use cuba_bootstrap::{Infrastructure, run_http};
use cuba_errors::AppError;
use tracing::info;

use product_catalog::application::{ProductHandler, ProductUseCase};
use product_catalog::infrastructure::persistence::PostgresProductRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_http("config", |infra: Infrastructure| async move {
        info!(app_name = %infra.config().app_name, "Initializing product-catalog service");

        let product_repo = Arc::new(PostgresProductRepository::new(infra.postgres_pool()));
        let handler: Arc<dyn ProductUseCase> = Arc::new(ProductHandler::new(product_repo));

        Ok::<_, AppError>(product_catalog::router(handler))
    })
    .await
}
