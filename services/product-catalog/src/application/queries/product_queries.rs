//! 商品查询

use crate::domain::value_objects::ProductId;

/// 按 ID 查询商品
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GetProductQuery {
    pub id: ProductId,
}
