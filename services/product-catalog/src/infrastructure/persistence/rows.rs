//! 数据库行映射结构

use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;

/// `product` 表的一行
///
/// 列名是 `product_name`，对外字段是 `name`；只在这里转换
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub product_name: String,
    pub price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId(row.id),
            name: row.product_name,
            price: row.price,
        }
    }
}
