//! 路由注册

use axum::{Router, routing::get};

use super::handlers::{
    SharedUseCase, create_product, delete_product, get_product, list_products,
    missing_product_id, update_product,
};

/// 商品 CRUD 路由
pub fn router(use_case: SharedUseCase) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/",
            get(missing_product_id)
                .put(missing_product_id)
                .delete(missing_product_id),
        )
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(use_case)
}
