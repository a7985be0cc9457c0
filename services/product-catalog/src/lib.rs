//! product-catalog - 商品 CRUD 服务
//!
//! API 层 → 用例层 → 仓储层 → PostgreSQL `product` 表

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod testing;

pub use api::router;
