//! 商品 HTTP 处理器

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::application::ProductUseCase;
use crate::application::commands::{
    CreateProductCommand, DeleteProductCommand, UpdateProductCommand,
};
use crate::application::queries::GetProductQuery;
use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;

use super::dto::{MessageResponse, ProductPayload};
use super::error::ApiError;

pub type SharedUseCase = Arc<dyn ProductUseCase>;

type IdParam = Result<Path<String>, PathRejection>;
type Body = Result<Json<ProductPayload>, JsonRejection>;

/// 解析路径中的商品 ID，在任何存储调用之前完成
fn parse_product_id(raw: IdParam) -> Result<ProductId, ApiError> {
    let Path(raw) = raw?;
    if raw.is_empty() {
        return Err(ApiError::MissingProductId);
    }
    raw.parse().map_err(|_| ApiError::InvalidProductId)
}

/// GET /products
pub async fn list_products(
    State(use_case): State<SharedUseCase>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = use_case.get_all_products().await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(use_case): State<SharedUseCase>,
    id: IdParam,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(id)?;

    use_case
        .get_product_by_id(GetProductQuery { id })
        .await?
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

/// POST /products
pub async fn create_product(
    State(use_case): State<SharedUseCase>,
    body: Body,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(payload) = body?;

    let product = use_case
        .create_product(CreateProductCommand {
            name: payload.name,
            price: payload.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id}
pub async fn update_product(
    State(use_case): State<SharedUseCase>,
    id: IdParam,
    body: Body,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_product_id(id)?;
    let Json(payload) = body?;

    use_case
        .update_product(UpdateProductCommand {
            id,
            name: payload.name,
            price: payload.price,
        })
        .await?;

    Ok(Json(MessageResponse::new("Product updated successfully")))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(use_case): State<SharedUseCase>,
    id: IdParam,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_product_id(id)?;

    use_case.delete_product(DeleteProductCommand { id }).await?;

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

/// `/products/` 后没有 ID
pub async fn missing_product_id() -> ApiError {
    ApiError::MissingProductId
}
