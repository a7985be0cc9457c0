//! 商品命令

use rust_decimal::Decimal;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::value_objects::ProductId;

/// 创建商品
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductCommand {
    pub name: String,
    pub price: Decimal,
}

impl From<CreateProductCommand> for NewProduct {
    fn from(cmd: CreateProductCommand) -> Self {
        NewProduct::new(cmd.name, cmd.price)
    }
}

/// 更新商品，ID 来自路径
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

impl From<UpdateProductCommand> for Product {
    fn from(cmd: UpdateProductCommand) -> Self {
        Product {
            id: cmd.id,
            name: cmd.name,
            price: cmd.price,
        }
    }
}

/// 删除商品
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteProductCommand {
    pub id: ProductId,
}
