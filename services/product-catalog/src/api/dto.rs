//! 请求/响应结构

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 创建/更新请求体 `{ "name": ..., "price": ... }`
///
/// 请求体里的 `id` 会被忽略
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: Decimal,
}

/// 状态消息 `{ "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
