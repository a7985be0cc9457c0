//! 商品实体

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProductId;

/// 商品
///
/// `price` 以 JSON 数字收发
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

/// 待创建的商品，ID 由存储层分配
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// 存储层分配 ID 后得到完整实体
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}
