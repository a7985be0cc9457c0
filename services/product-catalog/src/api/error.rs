//! API 错误到 HTTP 响应的映射

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cuba_errors::{AppError, ErrorBody};
use tracing::{error, warn};

use super::dto::MessageResponse;

pub const MSG_ID_REQUIRED: &str = "Product ID is required";
pub const MSG_INVALID_ID: &str = "Invalid Product ID";
pub const MSG_NOT_FOUND: &str = "Product not found";

#[derive(Debug)]
pub enum ApiError {
    /// 路径 ID 为空
    MissingProductId,
    /// 路径 ID 不是十进制整数
    InvalidProductId,
    /// 没有匹配的商品
    ProductNotFound,
    /// 请求体无法解析
    MalformedBody(String),
    /// 其他存储层错误
    App(AppError),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => Self::ProductNotFound,
            other => Self::App(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self::InvalidProductId
    }
}

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(MessageResponse::new(text))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingProductId => message(StatusCode::BAD_REQUEST, MSG_ID_REQUIRED),
            Self::InvalidProductId => message(StatusCode::BAD_REQUEST, MSG_INVALID_ID),
            Self::ProductNotFound => message(StatusCode::NOT_FOUND, MSG_NOT_FOUND),
            Self::MalformedBody(detail) => {
                warn!(error = %detail, "Rejected request body");
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(detail))).into_response()
            }
            Self::App(err) => {
                error!(error = %err, "Request failed");
                err.into_response()
            }
        }
    }
}
